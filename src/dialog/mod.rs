pub mod components;
pub mod window;

pub use components::{
    Button, CancelButton, Checkbox, Choice, Combobox, CompletionMode, Component, Date,
    DefaultButton, FileBrowser, FontSize, Image, Password, Text, TextBox, TextField,
};
pub use window::{validate_key, Window};

use std::collections::HashMap;

/// Результат работы Pashua: ключ элемента -> значение, которое вернула Pashua
pub type ResultMap = HashMap<String, String>;
