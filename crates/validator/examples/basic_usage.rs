//! Basic usage example for bulwark-validator

use bulwark_validator::prelude::*;

#[derive(Validatable)]
#[validate(rename_all = "PascalCase")]
struct Order {
    #[validate(required)]
    customer: Option<String>,

    #[validate(min_items = 1, max_items = 3, items_required)]
    lines: Vec<Option<Line>>,
}

#[derive(Validatable)]
#[validate(rename_all = "PascalCase")]
struct Line {
    #[validate(required)]
    quantity: Option<u32>,
}

fn main() {
    let good = Order {
        customer: Some("acme".into()),
        lines: vec![Some(Line { quantity: Some(2) })],
    };
    println!("good order valid: {}", validate(&good).is_valid());

    let bad = Order {
        customer: None,
        lines: vec![Some(Line { quantity: None }), None, None, None],
    };
    let report = validate(&bad);
    println!("{}", report.format(Some("bad order")));

    // Machine-readable form of the same report.
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("cannot serialize report: {e}"),
    }
}
