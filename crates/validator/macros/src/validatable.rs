use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Fields, Lit, Path, ext::IdentExt, parse_macro_input, parse_quote};

use crate::support::{attrs, diag, utils::RenameRule};

const ATTR: &str = "validate";

const FIELD_FLAGS: &[&str] = &["required", "items_required", "enumerable"];
const FIELD_VALUES: &[&str] = &["enumerable", "min_items", "max_items", "rename"];
const CONTAINER_VALUES: &[&str] = &["crate", "rename_all"];

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

struct Container {
    krate: Path,
    rename_all: Option<RenameRule>,
}

fn parse_container(input: &DeriveInput) -> syn::Result<Container> {
    let mut container = Container {
        krate: parse_quote!(::bulwark_validator),
        rename_all: None,
    };
    let Some(args) = attrs::parse_attrs(&input.attrs, ATTR)? else {
        return Ok(container);
    };
    args.ensure_known(ATTR, &[], CONTAINER_VALUES)?;

    if let Some(Lit::Str(path)) = args.get_value("crate") {
        container.krate = path.parse()?;
    } else if let Some(other) = args.get_value("crate") {
        return Err(diag::error_spanned(other, "expected a path string for `crate`"));
    }
    if let Some(Lit::Str(rule)) = args.get_value("rename_all") {
        container.rename_all = Some(RenameRule::parse(rule)?);
    } else if let Some(other) = args.get_value("rename_all") {
        return Err(diag::error_spanned(other, "expected a string for `rename_all`"));
    }
    Ok(container)
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let container = parse_container(&input)?;
    let krate = &container.krate;

    for param in input.generics.type_params_mut() {
        param.bounds.push(parse_quote!(#krate::Validatable));
    }

    let (shape, value_type) = match &input.data {
        Data::Struct(data) => (struct_shape(&container, &data.fields)?, false),
        Data::Enum(data) => {
            if let Some(variant) = data.variants.iter().find(|v| !v.fields.is_empty()) {
                return Err(diag::error_spanned(
                    variant,
                    "Validatable can only be derived for enums without fields",
                ));
            }
            (quote!(#krate::Shape::Leaf), true)
        }
        Data::Union(_) => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Validatable cannot be derived for unions",
            ));
        }
    };

    let value_type_fn = value_type.then(|| {
        quote! {
            fn is_value_type() -> bool {
                true
            }
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::Validatable for #name #ty_generics #where_clause {
            fn shape(&self) -> #krate::Shape<'_> {
                #shape
            }

            #value_type_fn
        }
    })
}

fn struct_shape(container: &Container, fields: &Fields) -> syn::Result<TokenStream2> {
    let krate = &container.krate;
    if matches!(fields, Fields::Unit) {
        return Ok(quote!(#krate::Shape::Leaf));
    }

    let mut visits = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let Some(args) = attrs::parse_attrs(&field.attrs, ATTR)? else {
            continue;
        };
        args.ensure_known(ATTR, FIELD_FLAGS, FIELD_VALUES)?;

        let (member, default_name) = match &field.ident {
            Some(ident) => {
                let name = ident.unraw().to_string();
                let name = match container.rename_all {
                    Some(rule) => rule.apply(&name),
                    None => name,
                };
                (ident.to_token_stream(), name)
            }
            None => {
                let index = syn::Index::from(index);
                let name = index.index.to_string();
                (index.to_token_stream(), name)
            }
        };
        let segment = args.get_string("rename")?.unwrap_or(default_name);

        let required = args.has_flag("required");
        let items_required = args.has_flag("items_required");
        let enumerable = args.get_bool("enumerable")?.unwrap_or(true);
        let min_items = args.get_usize("min_items")?.unwrap_or(0);
        let max_items = match args.get_usize("max_items")? {
            Some(max) => quote!(#max),
            None => quote!(::core::primitive::usize::MAX),
        };

        visits.push(quote! {
            .field(
                #segment,
                #krate::ValidationRule {
                    required: #required,
                    enumerable: #enumerable,
                    items_required: #items_required,
                    min_items: #min_items,
                    max_items: #max_items,
                },
                &self.#member,
            )
        });
    }

    Ok(quote! {
        #krate::Shape::Node(#krate::Node::object() #(#visits)*)
    })
}
