use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::{
    cli::{OutputFormat, SummaryArgs},
    table::{self, Align},
    views::{self, BlockFilter},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryLine<'a> {
    block_name: &'a str,
    new_registration: u64,
    joint_inspection: u64,
    work_order: u64,
    install: u64,
    install_and_inspection: u64,
    total: u64,
    completion_rate: f64,
}

pub fn execute(args: &SummaryArgs) -> Result<()> {
    let result = crate::load_result(&args.input)?;
    let filter = BlockFilter {
        district: args.district.as_deref(),
        search: args.search.as_deref(),
        sort: args.sort,
        limit: (args.top > 0).then_some(args.top),
    };
    let blocks = views::select_blocks(&result, &filter);

    let lines = blocks
        .iter()
        .map(|block| {
            let counts = &block.registration_stages;
            SummaryLine {
                block_name: &block.block_name,
                new_registration: counts.new_registration,
                joint_inspection: counts.joint_inspection,
                work_order: counts.work_order,
                install: counts.install,
                install_and_inspection: counts.install_and_inspection,
                total: counts.total,
                completion_rate: views::completion_rate(counts),
            }
        })
        .collect::<Vec<_>>();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lines)?),
        OutputFormat::Table => {
            let headers = [
                "block",
                "new",
                "joint_insp",
                "work_order",
                "install",
                "install_insp",
                "total",
                "completion",
            ]
            .map(String::from)
            .to_vec();
            let rows = lines
                .iter()
                .map(|line| {
                    vec![
                        line.block_name.to_string(),
                        line.new_registration.to_string(),
                        line.joint_inspection.to_string(),
                        line.work_order.to_string(),
                        line.install.to_string(),
                        line.install_and_inspection.to_string(),
                        line.total.to_string(),
                        format!("{:.1}%", line.completion_rate),
                    ]
                })
                .collect::<Vec<_>>();
            let aligns = [
                Align::Left,
                Align::Right,
                Align::Right,
                Align::Right,
                Align::Right,
                Align::Right,
                Align::Right,
                Align::Right,
            ];
            table::print_table(&headers, &rows, &aligns);
        }
    }

    info!(
        "Summarized {} block(s) across {} district(s)",
        blocks.len(),
        result.districts.len()
    );
    Ok(())
}
