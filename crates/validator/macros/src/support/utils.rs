use syn::LitStr;

use crate::support::diag;

/// Casing applied to field names by `#[validate(rename_all = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    Pascal,
    Camel,
    Snake,
}

impl RenameRule {
    pub fn parse(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            other => Err(diag::error_spanned(
                lit,
                format!(
                    "unsupported rename_all `{other}`, expected \"PascalCase\", \"camelCase\" or \"snake_case\""
                ),
            )),
        }
    }

    /// Applies the rule to a snake_case Rust field name.
    pub fn apply(self, field: &str) -> String {
        let field = field.strip_prefix("r#").unwrap_or(field);
        match self {
            Self::Snake => field.to_owned(),
            Self::Pascal => field.split('_').map(capitalize).collect(),
            Self::Camel => {
                let mut words = field.split('_').filter(|w| !w.is_empty());
                let first = words.next().unwrap_or_default().to_owned();
                first + &words.map(capitalize).collect::<String>()
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |c| {
        c.to_uppercase().chain(chars).collect()
    })
}
