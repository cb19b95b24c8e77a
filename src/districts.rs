use anyhow::Result;
use log::info;

use crate::{
    cli::DistrictsArgs,
    row::field,
    table::{self, Align},
};

pub fn execute(args: &DistrictsArgs) -> Result<()> {
    let result = crate::load_result(&args.input)?;

    let rows = result
        .districts
        .iter()
        .map(|district| {
            let blocks = result
                .blocks
                .values()
                .filter(|block| {
                    block
                        .rows
                        .iter()
                        .any(|row| row.get(field::DISTRICT_NAME) == district.as_str())
                })
                .count();
            let registrations = result
                .all_rows
                .iter()
                .filter(|row| row.get(field::DISTRICT_NAME) == district.as_str())
                .count();
            vec![
                district.clone(),
                blocks.to_string(),
                registrations.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let headers = ["district", "blocks", "registrations"]
        .map(String::from)
        .to_vec();
    table::print_table(&headers, &rows, &[Align::Left, Align::Right, Align::Right]);
    info!("Listed {} district(s)", rows.len());
    Ok(())
}
