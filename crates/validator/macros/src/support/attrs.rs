use syn::{
    Attribute, Ident, Lit, Meta, Result, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Parsed attribute arguments container.
#[derive(Debug, Clone, Default)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A flag like `required`
    Flag(Ident),
    /// Key-value pair like `min_items = 2`
    KeyValue { key: Ident, value: Lit },
}

impl AttrItem {
    pub fn key(&self) -> &Ident {
        match self {
            Self::Flag(key) | Self::KeyValue { key, .. } => key,
        }
    }
}

impl AttrArgs {
    /// Find a key-value pair by key name.
    pub fn get_value(&self, key: &str) -> Option<&Lit> {
        self.items.iter().find_map(|item| match item {
            AttrItem::KeyValue { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }

    /// Get a string value by key.
    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        match self.get_value(key) {
            None => Ok(None),
            Some(Lit::Str(s)) => Ok(Some(s.value())),
            Some(other) => Err(diag::error_spanned(
                other,
                format!("expected a string for `{key}`"),
            )),
        }
    }

    /// Get an unsigned integer value by key.
    pub fn get_usize(&self, key: &str) -> Result<Option<usize>> {
        match self.get_value(key) {
            None => Ok(None),
            Some(Lit::Int(i)) => i.base10_parse().map(Some),
            Some(other) => Err(diag::error_spanned(
                other,
                format!("expected an unsigned integer for `{key}`"),
            )),
        }
    }

    /// Get a boolean by key; a bare flag counts as `true`.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        if self.has_flag(key) {
            return Ok(Some(true));
        }
        match self.get_value(key) {
            None => Ok(None),
            Some(Lit::Bool(b)) => Ok(Some(b.value)),
            Some(other) => Err(diag::error_spanned(
                other,
                format!("expected `true` or `false` for `{key}`"),
            )),
        }
    }

    /// Check if a flag is present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, AttrItem::Flag(f) if f == flag))
    }

    /// Reject keys outside `known`, and flags given where a value is expected.
    pub fn ensure_known(&self, attr: &str, flags: &[&str], values: &[&str]) -> Result<()> {
        for item in &self.items {
            let key = item.key().to_string();
            let ok = match item {
                AttrItem::Flag(_) => flags.contains(&key.as_str()),
                AttrItem::KeyValue { .. } => values.contains(&key.as_str()),
            };
            if !ok {
                let hint = if flags.contains(&key.as_str()) {
                    format!("`{key}` is a flag and takes no value")
                } else if values.contains(&key.as_str()) {
                    format!("`{key}` needs a value: `{key} = ...`")
                } else {
                    format!("unknown #[{attr}] key `{key}`")
                };
                return Err(diag::error_spanned(item.key(), hint));
            }
        }
        Ok(())
    }
}

/// Parse attribute like `#[validate(...)]` (the whole Attribute, not only args).
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::Path(_) => Ok(Some(AttrArgs::default())),
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::NameValue(nv) => Err(diag::error_spanned(
            nv,
            format!("#[{expected}] must be #[{expected}(...)] or #[{expected}] (not name-value)"),
        )),
    }
}

/// Parse all attributes of a given type and merge them.
///
/// Returns `None` when no such attribute is present at all.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<Option<AttrArgs>> {
    let mut result: Option<AttrArgs> = None;

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result.get_or_insert_with(AttrArgs::default).items.extend(args.items);
        }
    }

    Ok(result)
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = if input.is_empty() {
            vec![]
        } else {
            Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
                .into_iter()
                .map(|x| x.0)
                .collect()
        };
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        // `parse_any` so keywords such as `crate` are accepted as keys.
        let key = Ident::parse_any(input)?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value: Lit = input.parse()?;
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parse(tokens: proc_macro2::TokenStream) -> AttrArgs {
        syn::parse2::<AttrArgsParser>(tokens).unwrap().0
    }

    #[test]
    fn flags_and_values() {
        let args = parse(quote!(required, min_items = 2, rename = "Lines"));

        assert_eq!(args.items.len(), 3);
        assert!(args.has_flag("required"));
        assert_eq!(args.get_usize("min_items").unwrap(), Some(2));
        assert_eq!(args.get_string("rename").unwrap().as_deref(), Some("Lines"));
        assert_eq!(args.get_usize("max_items").unwrap(), None);
    }

    #[test]
    fn bool_from_flag_or_literal() {
        let args = parse(quote!(items_required, enumerable = false));
        assert_eq!(args.get_bool("items_required").unwrap(), Some(true));
        assert_eq!(args.get_bool("enumerable").unwrap(), Some(false));
        assert_eq!(args.get_bool("required").unwrap(), None);
    }

    #[test]
    fn keyword_keys() {
        let args = parse(quote!(crate = "my::path"));
        assert_eq!(args.get_string("crate").unwrap().as_deref(), Some("my::path"));
    }

    #[test]
    fn wrong_literal_kind_is_an_error() {
        let args = parse(quote!(min_items = "two"));
        assert!(args.get_usize("min_items").is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let args = parse(quote!(required, colour = "red"));
        let err = args
            .ensure_known("validate", &["required"], &["rename"])
            .unwrap_err();
        assert!(err.to_string().contains("unknown #[validate] key `colour`"));

        let args = parse(quote!(rename));
        let err = args
            .ensure_known("validate", &["required"], &["rename"])
            .unwrap_err();
        assert!(err.to_string().contains("needs a value"));
    }
}
