//! Flatten a [`StyleConfig`] into the compact `st=` query value.
//!
//! ```text
//! st=wt|fc:112233;lbc:ffffff_rd|fc:445566_g|lc:00ff00
//! ```
//!
//! Blocks are separated by `_`, a block's code and its properties by `|`,
//! properties by `;`, and a property's code and color by `:`. Colors lose
//! their leading `#`. Nothing is escaped.

use crate::error::{Result, StyleError};
use crate::short_codes::{short_code, SETTINGS_CODE};
use crate::types::{PropertyMap, StyleConfig};

/// Prefix of every encoded style.
pub const PARAM_PREFIX: &str = "st=";

const RESERVED: [char; 5] = [':', ';', '|', '_', '='];

/// Encode one property map as `code:color;code:color`, in insertion order.
/// An empty map encodes to an empty string.
///
/// Stricter than a plain join: a color containing any of `: ; | _ =` is
/// rejected with [`StyleError::ReservedCharacter`], since nothing is escaped.
pub fn encode_properties(props: &PropertyMap) -> Result<String> {
    let mut pairs = Vec::with_capacity(props.len());
    for (name, color) in props {
        let code = short_code(name).ok_or_else(|| StyleError::UnknownProperty(name.clone()))?;
        let value = strip_first_char(color);
        if value.contains(RESERVED) {
            return Err(StyleError::ReservedCharacter {
                name: name.clone(),
                value: color.clone(),
            });
        }
        pairs.push(format!("{code}:{value}"));
    }
    Ok(pairs.join(";"))
}

/// Encode a full style. `Ok(None)` means there is nothing to apply and the
/// parameter should be left out of the URL entirely.
pub fn encode(style: &StyleConfig) -> Result<Option<String>> {
    if style.is_empty() {
        return Ok(None);
    }

    let mut blocks = Vec::new();

    if let Some(elements) = &style.elements {
        for (element, props) in elements {
            let code =
                short_code(element).ok_or_else(|| StyleError::UnknownElement(element.clone()))?;
            blocks.push(format!("{code}|{}", encode_properties(props)?));
        }
    }

    if let Some(settings) = &style.settings {
        blocks.push(format!("{SETTINGS_CODE}|{}", encode_properties(settings)?));
    }

    let encoded = format!("{PARAM_PREFIX}{}", blocks.join("_"));
    log::debug!("Encoded map style ({} blocks): {encoded}", blocks.len());
    Ok(Some(encoded))
}

/// The color without its leading `#` (whatever that first character is).
fn strip_first_char(color: &str) -> &str {
    let mut chars = color.chars();
    chars.next();
    chars.as_str()
}
