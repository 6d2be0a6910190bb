use serde::{Deserialize, Serialize};
use std::fmt;

/// Режим автодополнения в combobox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionMode {
    #[default]
    None,
    CaseSensitive,
    CaseInsensitive,
}

impl CompletionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionMode::None => "0",
            CompletionMode::CaseSensitive => "1",
            CompletionMode::CaseInsensitive => "2",
        }
    }
}

/// Размер шрифта textbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    #[default]
    Regular,
    Small,
    Mini,
}

impl FontSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Regular => "regular",
            FontSize::Small => "small",
            FontSize::Mini => "mini",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    pub label: String,
    pub tooltip: String,
    pub disabled: bool,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelButton {
    pub label: String,
    pub tooltip: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultButton {
    pub label: String,
    pub tooltip: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checkbox {
    pub label: String,
    pub default: bool,
    pub disabled: bool,
    pub tooltip: String,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub relx: Option<i32>,
    pub rely: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Combobox {
    pub label: String,
    pub options: Vec<String>,
    pub completion: Option<CompletionMode>,
    pub mandatory: bool,
    pub rows: Option<u32>,
    pub placeholder: String,
    pub disabled: bool,
    pub tooltip: String,
    pub width: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub relx: Option<i32>,
    pub rely: Option<i32>,
}

/// Выбор даты и/или времени. Pashua ожидает default в формате `YYYY-MM-DD HH:MM`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Date {
    pub label: String,
    pub textual: bool,
    pub use_date: bool,
    pub use_time: bool,
    pub default: String,
    pub disabled: bool,
    pub tooltip: String,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub label: String,
    pub path: String,
    pub border: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub upscale: bool,
    pub tooltip: String,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub relx: Option<i32>,
    pub rely: Option<i32>,
}

/// Поле выбора файла. Используется и для openbrowser, и для savebrowser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBrowser {
    pub label: String,
    pub default_path: String,
    pub width: Option<u32>,
    /// Список расширений через пробел, например `"jpg png"`
    pub filetype: String,
    pub placeholder: String,
    pub mandatory: bool,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub relx: Option<i32>,
    pub rely: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Password {
    pub label: String,
    pub default: String,
    pub disabled: bool,
    pub mandatory: bool,
    pub tooltip: String,
    pub width: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub relx: Option<i32>,
    pub rely: Option<i32>,
}

/// Общая запись для popup и radiobutton: список вариантов + выбранный по умолчанию
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Choice {
    pub options: Vec<String>,
    pub default: String,
    pub label: String,
    pub disabled: bool,
    pub tooltip: String,
    pub mandatory: bool,
    /// Учитывается только у popup
    pub width: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub relx: Option<i32>,
    pub rely: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    pub label: String,
    pub text: String,
    pub tooltip: String,
    pub width: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub relx: Option<i32>,
    pub rely: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBox {
    pub label: String,
    pub default: String,
    pub tooltip: String,
    pub fixed_font: bool,
    pub font_size: Option<FontSize>,
    pub mandatory: bool,
    pub disabled: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub relx: Option<i32>,
    pub rely: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextField {
    pub label: String,
    pub default: String,
    pub tooltip: String,
    pub mandatory: bool,
    pub disabled: bool,
    pub width: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub relx: Option<i32>,
    pub rely: Option<i32>,
}

/// Элемент окна Pashua. Тег `type` совпадает с именем типа в конфиге Pashua
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    Button(Button),
    CancelButton(CancelButton),
    DefaultButton(DefaultButton),
    Checkbox(Checkbox),
    Combobox(Combobox),
    Date(Date),
    Image(Image),
    OpenBrowser(FileBrowser),
    SaveBrowser(FileBrowser),
    Password(Password),
    Popup(Choice),
    RadioButton(Choice),
    Text(Text),
    TextBox(TextBox),
    TextField(TextField),
}

impl Component {
    /// Значение строки `<key>.type=`
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Button(_) => "button",
            Component::CancelButton(_) => "cancelbutton",
            Component::DefaultButton(_) => "defaultbutton",
            Component::Checkbox(_) => "checkbox",
            Component::Combobox(_) => "combobox",
            Component::Date(_) => "date",
            Component::Image(_) => "image",
            Component::OpenBrowser(_) => "openbrowser",
            Component::SaveBrowser(_) => "savebrowser",
            Component::Password(_) => "password",
            Component::Popup(_) => "popup",
            Component::RadioButton(_) => "radiobutton",
            Component::Text(_) => "text",
            Component::TextBox(_) => "textbox",
            Component::TextField(_) => "textfield",
        }
    }

    /// Варианты выбора, если элемент их поддерживает
    pub fn options(&self) -> &[String] {
        match self {
            Component::Combobox(c) => &c.options,
            Component::Popup(c) | Component::RadioButton(c) => &c.options,
            _ => &[],
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

macro_rules! impl_from_record {
    ($($record:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$record> for Component {
                fn from(record: $record) -> Self {
                    Component::$variant(record)
                }
            }
        )*
    };
}

// FileBrowser и Choice общие для двух вариантов, поэтому без From
impl_from_record!(
    Button => Button,
    CancelButton => CancelButton,
    DefaultButton => DefaultButton,
    Checkbox => Checkbox,
    Combobox => Combobox,
    Date => Date,
    Image => Image,
    Password => Password,
    Text => Text,
    TextBox => TextBox,
    TextField => TextField,
);
