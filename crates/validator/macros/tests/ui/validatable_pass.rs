use std::collections::BTreeSet;

use bulwark_validator::{Validatable, validate};

#[derive(Validatable)]
enum Priority {
    Low,
    High,
}

#[derive(Validatable)]
#[validate(rename_all = "PascalCase")]
struct Parcel {
    #[validate(required)]
    label: Option<String>,
    #[validate(required)]
    priority: Option<Priority>,
    weight_grams: u32,
}

#[derive(Validatable)]
#[validate(rename_all = "camelCase")]
struct Shipment<'a, T> {
    #[validate(required)]
    carrier: Option<&'a str>,
    #[validate(min_items = 1, max_items = 20, items_required)]
    parcels: Vec<Option<Parcel>>,
    #[validate(enumerable = false)]
    tags: BTreeSet<String>,
    #[validate(rename = "Extra")]
    extra: T,
    internal_note: String,
}

#[derive(Validatable)]
struct Pair(#[validate(required)] Option<bool>, u8);

#[derive(Validatable)]
struct Marker;

fn main() {
    let shipment = Shipment {
        carrier: Some("acme"),
        parcels: vec![Some(Parcel {
            label: Some("fragile".into()),
            priority: Some(Priority::High),
            weight_grams: 250,
        })],
        tags: BTreeSet::new(),
        extra: Pair(Some(true), 0),
        internal_note: String::new(),
    };
    assert!(validate(&shipment).is_valid());

    let _ = Priority::Low;
    assert!(validate(&Marker).is_valid());
}
