//! Таблицы атрибутов по видам элементов.
//!
//! Порядок строк в таблице = порядок строк в конфиге. Варианты (`option`)
//! сюда не входят, их дописывает `encode_component` после скалярных атрибутов.

use super::format::{escape_text, format_bool, format_int, format_uint};
use crate::dialog::{
    Button, CancelButton, Checkbox, Choice, Combobox, Date, DefaultButton, FileBrowser, Image,
    Password, Text, TextBox, TextField,
};
use std::borrow::Cow;

/// Значение одного атрибута до форматирования
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrValue<'a> {
    /// Свободный текст, пустая строка не выводится
    Text(&'a str),
    Int(Option<i32>),
    UInt(Option<u32>),
    /// Выводится всегда
    Bool(bool),
    Keyword(Option<&'static str>),
}

impl<'a> AttrValue<'a> {
    /// `None`, если атрибут не заполнен и строку выводить не нужно
    pub fn render(self) -> Option<Cow<'a, str>> {
        match self {
            AttrValue::Text("") => None,
            AttrValue::Text(text) => Some(escape_text(text)),
            AttrValue::Int(value) => value.map(|v| Cow::Owned(format_int(v))),
            AttrValue::UInt(value) => value.map(|v| Cow::Owned(format_uint(v))),
            AttrValue::Bool(value) => Some(Cow::Borrowed(format_bool(value))),
            AttrValue::Keyword(keyword) => keyword.map(Cow::Borrowed),
        }
    }
}

pub type Getter<T> = for<'a> fn(&'a T) -> AttrValue<'a>;

pub struct Attr<T> {
    pub name: &'static str,
    pub get: Getter<T>,
}

macro_rules! attr {
    (text $name:literal => $field:ident) => {
        Attr { name: $name, get: |c| AttrValue::Text(&c.$field) }
    };
    (int $name:literal => $field:ident) => {
        Attr { name: $name, get: |c| AttrValue::Int(c.$field) }
    };
    (uint $name:literal => $field:ident) => {
        Attr { name: $name, get: |c| AttrValue::UInt(c.$field) }
    };
    (bool $name:literal => $field:ident) => {
        Attr { name: $name, get: |c| AttrValue::Bool(c.$field) }
    };
}

pub const BUTTON: &[Attr<Button>] = &[
    attr!(text "label" => label),
    attr!(text "tooltip" => tooltip),
    attr!(bool "disabled" => disabled),
    attr!(int "x" => x),
    attr!(int "y" => y),
];

pub const CANCEL_BUTTON: &[Attr<CancelButton>] = &[
    attr!(text "label" => label),
    attr!(text "tooltip" => tooltip),
    attr!(bool "disabled" => disabled),
];

pub const DEFAULT_BUTTON: &[Attr<DefaultButton>] = &[
    attr!(text "label" => label),
    attr!(text "tooltip" => tooltip),
    attr!(bool "disabled" => disabled),
];

pub const CHECKBOX: &[Attr<Checkbox>] = &[
    attr!(text "label" => label),
    attr!(bool "default" => default),
    attr!(bool "disabled" => disabled),
    attr!(text "tooltip" => tooltip),
    attr!(int "x" => x),
    attr!(int "y" => y),
    attr!(int "relx" => relx),
    attr!(int "rely" => rely),
];

pub const COMBOBOX: &[Attr<Combobox>] = &[
    attr!(text "label" => label),
    attr!(bool "disabled" => disabled),
    attr!(text "tooltip" => tooltip),
    attr!(uint "width" => width),
    attr!(uint "rows" => rows),
    attr!(int "x" => x),
    attr!(int "y" => y),
    attr!(int "relx" => relx),
    attr!(int "rely" => rely),
    attr!(text "placeholder" => placeholder),
    attr!(bool "mandatory" => mandatory),
    Attr {
        name: "completion",
        get: |c| AttrValue::Keyword(c.completion.map(|mode| mode.as_str())),
    },
];

pub const DATE: &[Attr<Date>] = &[
    attr!(text "label" => label),
    attr!(text "tooltip" => tooltip),
    attr!(bool "disabled" => disabled),
    attr!(text "default" => default),
    attr!(bool "date" => use_date),
    attr!(bool "time" => use_time),
    attr!(bool "textual" => textual),
    attr!(int "x" => x),
    attr!(int "y" => y),
];

pub const IMAGE: &[Attr<Image>] = &[
    attr!(text "label" => label),
    attr!(text "path" => path),
    attr!(text "tooltip" => tooltip),
    attr!(bool "border" => border),
    attr!(uint "width" => width),
    attr!(uint "height" => height),
    attr!(uint "maxwidth" => max_width),
    attr!(uint "maxheight" => max_height),
    attr!(bool "upscale" => upscale),
    attr!(int "x" => x),
    attr!(int "y" => y),
    attr!(int "relx" => relx),
    attr!(int "rely" => rely),
];

/// openbrowser и savebrowser
pub const FILE_BROWSER: &[Attr<FileBrowser>] = &[
    attr!(text "label" => label),
    attr!(text "default" => default_path),
    attr!(text "filetype" => filetype),
    attr!(uint "width" => width),
    attr!(bool "mandatory" => mandatory),
    attr!(text "placeholder" => placeholder),
    attr!(int "x" => x),
    attr!(int "y" => y),
    attr!(int "relx" => relx),
    attr!(int "rely" => rely),
];

pub const PASSWORD: &[Attr<Password>] = &[
    attr!(text "label" => label),
    attr!(text "tooltip" => tooltip),
    attr!(uint "width" => width),
    attr!(text "default" => default),
    attr!(bool "disabled" => disabled),
    attr!(bool "mandatory" => mandatory),
    attr!(int "x" => x),
    attr!(int "y" => y),
    attr!(int "relx" => relx),
    attr!(int "rely" => rely),
];

pub const POPUP: &[Attr<Choice>] = &[
    attr!(text "label" => label),
    attr!(text "tooltip" => tooltip),
    attr!(uint "width" => width),
    attr!(text "default" => default),
    attr!(bool "disabled" => disabled),
    attr!(bool "mandatory" => mandatory),
    attr!(int "x" => x),
    attr!(int "y" => y),
    attr!(int "relx" => relx),
    attr!(int "rely" => rely),
];

// У radiobutton нет ширины
pub const RADIO_BUTTON: &[Attr<Choice>] = &[
    attr!(text "label" => label),
    attr!(text "tooltip" => tooltip),
    attr!(text "default" => default),
    attr!(bool "disabled" => disabled),
    attr!(bool "mandatory" => mandatory),
    attr!(int "x" => x),
    attr!(int "y" => y),
    attr!(int "relx" => relx),
    attr!(int "rely" => rely),
];

pub const TEXT: &[Attr<Text>] = &[
    attr!(text "label" => label),
    attr!(text "text" => text),
    attr!(text "tooltip" => tooltip),
    attr!(uint "width" => width),
    attr!(int "x" => x),
    attr!(int "y" => y),
    attr!(int "relx" => relx),
    attr!(int "rely" => rely),
];

pub const TEXT_BOX: &[Attr<TextBox>] = &[
    attr!(text "label" => label),
    attr!(text "default" => default),
    attr!(text "tooltip" => tooltip),
    attr!(bool "disabled" => disabled),
    attr!(bool "mandatory" => mandatory),
    Attr {
        name: "fonttype",
        get: |c| AttrValue::Keyword(c.fixed_font.then_some("fixed")),
    },
    Attr {
        name: "fontsize",
        get: |c| AttrValue::Keyword(c.font_size.map(|size| size.as_str())),
    },
    attr!(uint "width" => width),
    attr!(uint "height" => height),
    attr!(int "x" => x),
    attr!(int "y" => y),
    attr!(int "relx" => relx),
    attr!(int "rely" => rely),
];

pub const TEXT_FIELD: &[Attr<TextField>] = &[
    attr!(text "label" => label),
    attr!(text "default" => default),
    attr!(text "tooltip" => tooltip),
    attr!(bool "disabled" => disabled),
    attr!(bool "mandatory" => mandatory),
    attr!(uint "width" => width),
    attr!(int "x" => x),
    attr!(int "y" => y),
    attr!(int "relx" => relx),
    attr!(int "rely" => rely),
];
