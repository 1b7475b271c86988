use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::{quote, TokenStreamExt};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Data, DeriveInput, Fields, Ident, LitStr, Token,
};

#[proc_macro_derive(Layer)]
pub fn derive_layer(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = ast.ident;
    let variants = match ast.data {
        Data::Enum(ref data) if data.variants.iter().all(|v| matches!(v.fields, Fields::Unit)) => {
            data.variants.iter().map(|v| &v.ident).collect::<Vec<_>>()
        }
        _ => {
            return syn::Error::new_spanned(&name, "Layer needs an enum of unit variants")
                .to_compile_error()
                .into()
        }
    };
    let arms = variants
        .iter()
        .map(|v| {
            quote! {
                i if i == #name::#v as u8 => Some(#name::#v),
            }
        })
        .reduce(|mut acc, v| {
            acc.append_all(v);
            acc
        });

    let expanded = quote! {
        impl rustkbd::keyboard::Layer for #name {
            fn index(&self) -> u8 {
                *self as u8
            }

            fn from_index(index: u8) -> Option<Self> {
                match index {
                    #arms
                    _ => None,
                }
            }
        }
    };

    proc_macro::TokenStream::from(expanded)
}

macro_rules! key {
    ($n:tt, $i:ident) => {
        ($n, quote!(rustkbd::keyboard::Key::$i))
    };
    ($i:ident) => {
        (stringify!($i), quote!(rustkbd::keyboard::Key::$i))
    };
}

macro_rules! lighting {
    ($n:tt, $i:ident) => {
        (
            $n,
            quote!(rustkbd::keyboard::Action::Lighting(
                rustkbd::keyboard::Lighting::$i
            )),
        )
    };
}

fn key_table() -> HashMap<&'static str, TokenStream> {
    [
        key!("", None),
        key!("Trn", Transparent),
        key!(A),
        key!(B),
        key!(C),
        key!(D),
        key!(E),
        key!(F),
        key!(G),
        key!(H),
        key!(I),
        key!(J),
        key!(K),
        key!(L),
        key!(M),
        key!(N),
        key!(O),
        key!(P),
        key!(Q),
        key!(R),
        key!(S),
        key!(T),
        key!(U),
        key!(V),
        key!(W),
        key!(X),
        key!(Y),
        key!(Z),
        key!("1", Digit1_Exclamation),
        key!("2", Digit2_At),
        key!("3", Digit3_Number),
        key!("4", Digit4_Dollar),
        key!("5", Digit5_Percent),
        key!("6", Digit6_Circumflex),
        key!("7", Digit7_Ampersand),
        key!("8", Digit8_Asterisk),
        key!("9", Digit9_LeftParenthesis),
        key!("0", Digit0_RightParenthesis),
        key!(Enter),
        key!("Esc", Escape),
        key!("Del", Delete),
        key!(Tab),
        key!(Space),
        key!("-", HyphenMinus_LowLine),
        key!("=", Equal_Plus),
        key!("[", LeftSquareBracket_LeftCurlyBracket),
        key!("]", RightSquareBracket_RightCurlyBracket),
        key!("\\", Backslash_VerticalBar),
        key!(";", Semicolon_Colon),
        key!("'", Apostrophe_Quotation),
        key!("`", Grave_Tilde),
        key!(",", Comma_LessThan),
        key!(".", Period_GreaterThan),
        key!("/", Slash_Question),
        key!("Caps", CapsLock),
        key!(F1),
        key!(F2),
        key!(F3),
        key!(F4),
        key!(F5),
        key!(F6),
        key!(F7),
        key!(F8),
        key!(F9),
        key!(F10),
        key!(F11),
        key!(F12),
        key!("PrScr", PrintScreen),
        key!("ScLck", ScrollLock),
        key!(Pause),
        key!("Ins", Insert),
        key!(Home),
        key!("PgUp", PageUp),
        key!("DelFw", DeleteForward),
        key!(End),
        key!("PgDn", PageDown),
        key!("Right", RightArrow),
        key!("Left", LeftArrow),
        key!("Down", DownArrow),
        key!("Up", UpArrow),
        key!("LCtl", LeftControl),
        key!("LSft", LeftShift),
        key!("LAlt", LeftAlt),
        key!("LGui", LeftGui),
        key!("RCtl", RightControl),
        key!("RSft", RightShift),
        key!("RAlt", RightAlt),
        key!("RGui", RightGui),
    ]
    .into_iter()
    .collect()
}

fn lighting_table() -> HashMap<&'static str, TokenStream> {
    [
        lighting!("RgbTog", UnderglowToggle),
        lighting!("RgbMod", UnderglowModeStep),
        lighting!("RgbRnb", UnderglowRainbow),
        lighting!("RgbSnk", UnderglowSnake),
        lighting!("BlTog", BacklightToggle),
        lighting!("BlStep", BacklightStep),
        lighting!("BlBrth", BacklightBreathing),
    ]
    .into_iter()
    .collect()
}

fn modifier_bit(symbol: &str) -> Option<u8> {
    let bit = match symbol {
        "LCtl" => 0x01,
        "LSft" => 0x02,
        "LAlt" => 0x04,
        "LGui" => 0x08,
        "RCtl" => 0x10,
        "RSft" => 0x20,
        "RAlt" => 0x40,
        "RGui" => 0x80,
        _ => return None,
    };
    Some(bit)
}

struct LayoutInput {
    layer: Ident,
    custom: Ident,
    table: LitStr,
}

impl Parse for LayoutInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let layer = input.parse()?;
        input.parse::<Token![,]>()?;
        let custom = input.parse()?;
        input.parse::<Token![,]>()?;
        let table = input.parse()?;
        Ok(LayoutInput {
            layer,
            custom,
            table,
        })
    }
}

struct Cells<'a> {
    layer: &'a Ident,
    custom: &'a Ident,
    keys: HashMap<&'static str, TokenStream>,
    lighting: HashMap<&'static str, TokenStream>,
}

impl Cells<'_> {
    fn action(&self, cell: &str) -> TokenStream {
        let action = quote!(rustkbd::keyboard::Action);
        if let Some(key) = self.keys.get(cell) {
            return quote!(#action::Key(#key));
        }
        if let Some(lighting) = self.lighting.get(cell) {
            return lighting.clone();
        }
        if let Some(target) = layer_argument(cell, "MO") {
            let layer = self.layer;
            return quote!(#action::Momentary(#layer::#target));
        }
        if let Some(target) = layer_argument(cell, "TO") {
            let layer = self.layer;
            return quote!(#action::SwitchTo(#layer::#target));
        }
        if cell.contains('+') {
            return self.chord(cell);
        }
        match syn::parse_str::<Ident>(cell) {
            Ok(code) => {
                let custom = self.custom;
                quote!(#action::Custom(#custom::#code))
            }
            Err(_) => unknown(cell),
        }
    }

    fn chord(&self, cell: &str) -> TokenStream {
        let mut parts = cell.split('+').map(str::trim).collect::<Vec<_>>();
        let Some(key) = parts.pop().and_then(|k| self.keys.get(k)) else {
            return unknown(cell);
        };
        let mut bits = 0u8;
        for part in parts {
            match modifier_bit(part) {
                Some(bit) => bits |= bit,
                None => return unknown(part),
            }
        }
        quote! {
            rustkbd::keyboard::Action::Chord(
                rustkbd::keyboard::Modifiers::from_bits(#bits),
                #key,
            )
        }
    }
}

fn layer_argument(cell: &str, function: &str) -> Option<Ident> {
    let argument = cell
        .strip_prefix(function)?
        .strip_prefix('(')?
        .strip_suffix(')')?;
    syn::parse_str::<Ident>(argument.trim()).ok()
}

fn unknown(symbol: &str) -> TokenStream {
    let message = "layout: Unknown symbol: ".to_string() + symbol;
    quote!(compile_error!(#message))
}

/// Build a `[[Action; COLS]; ROWS]` from a drawing of the keys.
///
/// ```ignore
/// const KEYS: [[Action<Custom, Layer>; 2]; 2] = layout! { Layer, Custom, r"
///     | MO(Fn) | LGui+LSft+M |
///     |  Trn   |  GitPush    |
/// "};
/// ```
///
/// A cell is a key mnemonic, a lighting command, `MO(layer)`, `TO(layer)`,
/// modifiers and a key joined with `+`, or a variant of the custom code type.
#[proc_macro]
pub fn layout(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as LayoutInput);
    let cells = Cells {
        layer: &input.layer,
        custom: &input.custom,
        keys: key_table(),
        lighting: lighting_table(),
    };

    let array = input
        .table
        .value()
        .trim()
        .lines()
        .map(str::trim)
        .map(|line| {
            let array = line
                .split('|')
                .map(str::trim)
                .collect::<Vec<_>>()
                .into_iter()
                .skip(1)
                .rev()
                .skip(1)
                .rev()
                .map(|k| cells.action(k))
                .map(|t| quote! {#t,})
                .collect::<TokenStream>();
            quote! {
                [#array]
            }
        })
        .map(|t| quote! {#t,})
        .collect::<TokenStream>();

    let expanded = quote! {
        [#array]
    };

    proc_macro::TokenStream::from(expanded)
}
