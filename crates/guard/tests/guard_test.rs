//! Validation guards raising typed errors.

use bulwark_guard::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Once;
use thiserror_free::Rejected;

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Validatable, Default)]
#[validate(rename_all = "PascalCase")]
struct Transfer {
    #[validate(required)]
    account: Option<String>,
    #[validate(min_items = 1, max_items = 3)]
    legs: Vec<u64>,
}

fn transfer(account: Option<&str>, legs: &[u64]) -> Transfer {
    Transfer {
        account: account.map(str::to_owned),
        legs: legs.to_vec(),
    }
}

/// Error kinds written by hand, without `thiserror`, still work.
mod thiserror_free {
    use bulwark_guard::prelude::*;
    use std::fmt;

    #[derive(Debug, PartialEq, Eq)]
    pub struct Rejected(pub String);

    impl fmt::Display for Rejected {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "rejected: {}", self.0)
        }
    }

    impl std::error::Error for Rejected {}

    impl ErrorKind for Rejected {
        fn constructors() -> ConstructorSet<Self> {
            ConstructorSet::new().message(Rejected)
        }
    }
}

#[test]
fn valid_value_passes() {
    init_tracing();
    let result = if_is_not_valid::<ArgumentError, _>(&transfer(Some("acc"), &[10]), None);
    assert!(result.is_ok());
}

#[test]
fn invalid_value_raises_with_formatted_report() {
    init_tracing();
    let raised =
        if_is_not_valid::<ArgumentError, _>(&Transfer::default(), Some("posting transfer"))
            .unwrap_err();

    let error = raised.into_kind().unwrap();
    assert_eq!(
        error.message(),
        "posting transfer - Following paths failed the validation checks:\n \
         >> $.Account: required, found null/absent\n \
         >> $.Legs: minimum item count is 1, found 0"
    );
}

#[test]
fn report_without_prefix() {
    let raised = if_is_not_valid::<Rejected, _>(&transfer(Some("acc"), &[1, 2, 3, 4]), None)
        .unwrap_err();
    assert_eq!(
        raised.kind(),
        Some(&Rejected(
            "Following paths failed the validation checks:\n \
             >> $.Legs: maximum item count is 3, found 4"
                .to_owned()
        ))
    );
}

#[rstest]
#[case::valid(transfer(Some("acc"), &[1]), true)]
#[case::invalid(transfer(None, &[1]), false)]
fn if_is_valid_mirrors(#[case] value: Transfer, #[case] raises: bool) {
    let result = if_is_valid::<InvalidOperationError, _>(&value, "already valid");
    assert_eq!(result.is_err(), raises);
    if let Err(raised) = result {
        assert_eq!(raised.to_string(), "already valid");
    }
}

#[test]
fn kind_without_message_constructor_is_misconfigured() {
    #[derive(Debug)]
    struct Silent;

    impl std::fmt::Display for Silent {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("silent")
        }
    }

    impl std::error::Error for Silent {}

    impl ErrorKind for Silent {
        fn constructors() -> ConstructorSet<Self> {
            ConstructorSet::new().no_args(|| Silent)
        }
    }

    let raised = if_is_not_valid::<Silent, _>(&Transfer::default(), None).unwrap_err();
    assert!(raised.is_misconfigured());

    // Nothing is resolved while the value is valid.
    assert!(if_is_not_valid::<Silent, _>(&transfer(Some("a"), &[1]), None).is_ok());
}

#[test]
fn guard_with_custom_root() {
    init_tracing();
    let validator =
        GraphValidator::with_config(ValidatorConfig::default().with_root("transfer")).unwrap();
    let guard = Guard::<ArgumentError>::with_validator(validator);

    let raised = guard
        .if_is_not_valid(&transfer(None, &[5]), None)
        .unwrap_err();
    assert!(raised.to_string().contains(" >> transfer.Account: required"));
    assert_eq!(guard.validator().config().root, "transfer");
}

#[test]
fn slices_and_options_as_roots() {
    let batch = vec![transfer(Some("a"), &[1]), transfer(None, &[])];
    let raised = if_is_not_valid::<ArgumentError, _>(batch.as_slice(), None).unwrap_err();
    let message = raised.into_kind().unwrap().message().to_owned();
    assert!(message.contains(" >> $[1].Account: required, found null/absent"));
    assert!(message.contains(" >> $[1].Legs: minimum item count is 1, found 0"));

    let missing: Option<Transfer> = None;
    assert!(if_is_not_valid::<ArgumentError, _>(&missing, None).is_ok());
}
