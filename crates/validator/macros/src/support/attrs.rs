use syn::{Attribute, LitStr};

use super::diag;

/// Name of the field attribute carrying the annotation.
pub const VALIDATE: &str = "validate";

/// Reads the `#[validate("...")]` annotation of a field.
///
/// Returns `None` when the field has no such attribute. A second
/// `validate` attribute, or an argument that is not a single string
/// literal, is an error.
pub fn annotation(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(VALIDATE)) {
        if found.is_some() {
            return Err(diag::error_spanned(
                attr,
                "duplicate `validate` attribute; combine clauses with `;`",
            ));
        }

        let lit = attr.parse_args::<LitStr>().map_err(|_| {
            diag::error_spanned(
                attr,
                "expected a string literal, e.g. `#[validate(\"min:1;max:10\")]`",
            )
        })?;
        found = Some(lit);
    }

    Ok(found)
}
