//! Преобразование `Window` в построчный конфиг Pashua (`key.attribute=value`).

pub mod attrs;
pub mod format;

use crate::dialog::{Component, Window};
use attrs::Attr;
use format::{escape_text, format_float, format_int, format_uint};

pub use format::RETURN_TOKEN;

/// Ключ строк, относящихся к самому окну
const WINDOW_KEY: &str = "*";

/// Закодировать окно целиком: сначала настройки окна, затем элементы по порядку ключей
pub fn encode_window(window: &Window) -> String {
    let mut lines = window_lines(window);
    for (key, component) in &window.components {
        lines.push(encode_component(key, component));
    }
    lines.join("\n")
}

/// Строки одного элемента: `<key>.type=<kind>`, атрибуты по таблице, затем варианты
pub fn encode_component(key: &str, component: &Component) -> String {
    let mut lines = vec![format!("{}.type={}", key, component.kind())];

    match component {
        Component::Button(c) => emit_attrs(&mut lines, key, c, attrs::BUTTON),
        Component::CancelButton(c) => emit_attrs(&mut lines, key, c, attrs::CANCEL_BUTTON),
        Component::DefaultButton(c) => emit_attrs(&mut lines, key, c, attrs::DEFAULT_BUTTON),
        Component::Checkbox(c) => emit_attrs(&mut lines, key, c, attrs::CHECKBOX),
        Component::Combobox(c) => emit_attrs(&mut lines, key, c, attrs::COMBOBOX),
        Component::Date(c) => emit_attrs(&mut lines, key, c, attrs::DATE),
        Component::Image(c) => emit_attrs(&mut lines, key, c, attrs::IMAGE),
        Component::OpenBrowser(c) | Component::SaveBrowser(c) => {
            emit_attrs(&mut lines, key, c, attrs::FILE_BROWSER)
        }
        Component::Password(c) => emit_attrs(&mut lines, key, c, attrs::PASSWORD),
        Component::Popup(c) => emit_attrs(&mut lines, key, c, attrs::POPUP),
        Component::RadioButton(c) => emit_attrs(&mut lines, key, c, attrs::RADIO_BUTTON),
        Component::Text(c) => emit_attrs(&mut lines, key, c, attrs::TEXT),
        Component::TextBox(c) => emit_attrs(&mut lines, key, c, attrs::TEXT_BOX),
        Component::TextField(c) => emit_attrs(&mut lines, key, c, attrs::TEXT_FIELD),
    }

    for option in component.options() {
        lines.push(format!("{}.option={}", key, escape_text(option)));
    }

    lines.join("\n")
}

fn emit_attrs<T>(lines: &mut Vec<String>, key: &str, record: &T, table: &[Attr<T>]) {
    for attr in table {
        if let Some(value) = (attr.get)(record).render() {
            lines.push(format!("{}.{}={}", key, attr.name, value));
        }
    }
}

fn window_lines(window: &Window) -> Vec<String> {
    let mut lines = Vec::new();
    let mut push = |attribute: &str, value: &str| {
        lines.push(format!("{}.{}={}", WINDOW_KEY, attribute, value));
    };

    if !window.title.is_empty() {
        push("title", &escape_text(&window.title));
    }

    // Нулевая прозрачность = невидимое окно, такое не выводим
    if window.transparency > 0.0 {
        push("transparency", &format_float(window.transparency.min(1.0)));
    }

    if window.auto_close_time > 0 {
        push("autoclosetime", &format_uint(window.auto_close_time));
    }

    // autosavekey и явная позиция взаимоисключающие
    if !window.auto_save_key.is_empty() {
        push("autosavekey", &escape_text(&window.auto_save_key));
    } else {
        if let Some(x) = window.x {
            push("x", &format_int(x));
        }
        if let Some(y) = window.y {
            push("y", &format_int(y));
        }
    }

    if window.floating {
        push("floating", "1");
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::*;
    use crate::services::parse_output;

    fn sample_window() -> Window {
        Window::new("Dialog Box")
            .with_auto_save_key("hurga")
            .with_transparency(1.0)
            .with_component(
                "tf",
                TextField {
                    label: "Gib was ein".into(),
                    default: "42".into(),
                    width: Some(100),
                    y: Some(20),
                    ..Default::default()
                },
            )
            .with_component(
                "cb",
                Combobox {
                    label: "My combobox label".into(),
                    options: vec!["Gromit".into(), "Wallace".into(), "Harold".into(), "Maude".into()],
                    width: Some(220),
                    tooltip: "Choose from the list".into(),
                    completion: Some(CompletionMode::CaseInsensitive),
                    y: Some(60),
                    ..Default::default()
                },
            )
            .with_component(
                "dt",
                Date {
                    label: "TickTock".into(),
                    tooltip: "A Date/Time control".into(),
                    use_date: true,
                    default: "2020-07-04".into(),
                    y: Some(120),
                    ..Default::default()
                },
            )
            .with_component("ok", DefaultButton { label: "OK".into(), ..Default::default() })
            .with_component("cancel", CancelButton { label: "Cancel".into(), ..Default::default() })
    }

    fn lines_for<'a>(text: &'a str, prefix: &str) -> Vec<&'a str> {
        text.lines().filter(|l| l.starts_with(prefix)).collect()
    }

    #[test]
    fn window_settings_are_wildcard_lines() {
        let text = encode_window(&sample_window());
        assert!(text.starts_with("*.title=Dialog Box\n"));
        assert!(text.contains("*.transparency=1.0000"));
        assert!(text.contains("*.autosavekey=hurga"));
        assert!(!text.contains("*.x="));
        assert!(!text.contains("*.floating"));
    }

    #[test]
    fn empty_title_is_omitted() {
        let text = encode_window(&Window::new("").with_component("ok", DefaultButton::default()));
        assert!(!text.contains("*.title"));
        assert!(text.starts_with("ok.type=defaultbutton"));
    }

    #[test]
    fn position_only_without_auto_save_key() {
        let window = Window::new("w").with_position(10, -5).with_auto_close_time(30).floating();
        let text = encode_window(&window);
        assert_eq!(
            text,
            "*.title=w\n*.autoclosetime=30\n*.x=10\n*.y=-5\n*.floating=1"
        );

        let with_key = window.with_auto_save_key("pos");
        let text = encode_window(&with_key);
        assert!(text.contains("*.autosavekey=pos"));
        assert!(!text.contains("*.x="));
    }

    #[test]
    fn transparency_is_clamped_and_fixed_precision() {
        let text = encode_window(&Window::new("w").with_transparency(0.75));
        assert!(text.contains("*.transparency=0.7500"));
        let text = encode_window(&Window::new("w").with_transparency(3.5));
        assert!(text.contains("*.transparency=1.0000"));
    }

    #[test]
    fn component_lines_follow_table_order() {
        let text = encode_component(
            "btn",
            &Component::Button(Button {
                label: "Go".into(),
                tooltip: "Run it".into(),
                disabled: true,
                x: Some(5),
                y: Some(0),
            }),
        );
        assert_eq!(
            text,
            "btn.type=button\nbtn.label=Go\nbtn.tooltip=Run it\nbtn.disabled=1\nbtn.x=5\nbtn.y=0"
        );
    }

    #[test]
    fn booleans_are_only_one_or_zero() {
        let text = encode_window(&sample_window());
        for name in ["disabled", "mandatory", "date", "time", "textual"] {
            let suffix = format!(".{}=", name);
            for line in text.lines().filter(|l| l.contains(&suffix)) {
                let value = line.split_once('=').map(|(_, v)| v).unwrap();
                assert!(value == "1" || value == "0", "строка {:?}", line);
            }
        }
        assert!(text.contains("dt.date=1"));
        assert!(text.contains("dt.time=0"));
    }

    #[test]
    fn options_keep_input_order() {
        let text = encode_window(&sample_window());
        assert_eq!(
            lines_for(&text, "cb.option="),
            vec!["cb.option=Gromit", "cb.option=Wallace", "cb.option=Harold", "cb.option=Maude"]
        );
        let last_scalar = text.lines().position(|l| l == "cb.completion=2").unwrap();
        let first_option = text.lines().position(|l| l == "cb.option=Gromit").unwrap();
        assert!(last_scalar < first_option);
    }

    #[test]
    fn radio_and_popup_emit_n_options() {
        let choice = Choice {
            options: vec!["a".into(), "b".into(), "c".into()],
            default: "b".into(),
            ..Default::default()
        };
        for component in [Component::Popup(choice.clone()), Component::RadioButton(choice.clone())] {
            let text = encode_component("rb", &component);
            assert_eq!(lines_for(&text, "rb.option=").len(), 3);
            assert!(text.contains("rb.default=b"));
        }
    }

    #[test]
    fn newlines_never_leak_into_lines() {
        let window = Window::new("Line one\nline two")
            .with_component("t", Text { text: "Hello\nWorld".into(), ..Default::default() })
            .with_component(
                "tb",
                TextBox { default: "a\r\nb".into(), fixed_font: true, ..Default::default() },
            )
            .with_component(
                "pop",
                Component::Popup(Choice { options: vec!["x\ny".into()], ..Default::default() }),
            );
        let text = encode_window(&window);

        assert!(text.contains("*.title=Line one[return]line two"));
        assert!(text.contains("t.text=Hello[return]World"));
        assert!(text.contains("tb.default=a[return]b"));
        assert!(text.contains("tb.fonttype=fixed"));
        assert!(text.contains("pop.option=x[return]y"));
        for line in text.lines() {
            assert!(line.contains('='), "строка без '=': {:?}", line);
        }
    }

    #[test]
    fn text_box_lines_follow_table_order() {
        let text = encode_component(
            "tb",
            &Component::TextBox(TextBox {
                label: "Notes".into(),
                default: "one\ntwo".into(),
                tooltip: "Free text".into(),
                fixed_font: true,
                font_size: Some(FontSize::Small),
                mandatory: true,
                disabled: false,
                width: Some(300),
                height: Some(80),
                x: Some(1),
                y: Some(2),
                relx: Some(3),
                rely: Some(4),
            }),
        );
        assert_eq!(
            text,
            "tb.type=textbox\ntb.label=Notes\ntb.default=one[return]two\ntb.tooltip=Free text\n\
             tb.disabled=0\ntb.mandatory=1\ntb.fonttype=fixed\ntb.fontsize=small\ntb.width=300\n\
             tb.height=80\ntb.x=1\ntb.y=2\ntb.relx=3\ntb.rely=4"
        );
    }

    #[test]
    fn image_lines_follow_table_order() {
        let text = encode_component(
            "img",
            &Component::Image(Image {
                label: "Logo".into(),
                path: "/tmp/logo.png".into(),
                border: true,
                width: Some(64),
                height: Some(32),
                max_width: Some(640),
                max_height: Some(320),
                upscale: false,
                tooltip: "The logo".into(),
                x: Some(10),
                y: Some(20),
                relx: None,
                rely: Some(-5),
            }),
        );
        assert_eq!(
            text,
            "img.type=image\nimg.label=Logo\nimg.path=/tmp/logo.png\nimg.tooltip=The logo\n\
             img.border=1\nimg.width=64\nimg.height=32\nimg.maxwidth=640\nimg.maxheight=320\n\
             img.upscale=0\nimg.x=10\nimg.y=20\nimg.rely=-5"
        );
    }

    #[test]
    fn file_browser_lines_follow_table_order() {
        let browser = FileBrowser {
            label: "Pick".into(),
            default_path: "/Users/me".into(),
            width: Some(310),
            filetype: "jpg png".into(),
            placeholder: "Choose a file".into(),
            mandatory: true,
            x: Some(0),
            y: Some(7),
            relx: Some(2),
            rely: None,
        };
        let expected_tail = "fb.label=Pick\nfb.default=/Users/me\nfb.filetype=jpg png\nfb.width=310\n\
                             fb.mandatory=1\nfb.placeholder=Choose a file\nfb.x=0\nfb.y=7\nfb.relx=2";

        let open = encode_component("fb", &Component::OpenBrowser(browser.clone()));
        assert_eq!(open, format!("fb.type=openbrowser\n{}", expected_tail));

        let save = encode_component("fb", &Component::SaveBrowser(browser));
        assert_eq!(save, format!("fb.type=savebrowser\n{}", expected_tail));
    }

    #[test]
    fn carriage_returns_never_leak_into_lines() {
        let window = Window::new("a\rb")
            .with_component("k", Text { text: "x\ry".into(), ..Default::default() });
        let text = encode_window(&window);
        assert_eq!(text, "*.title=a[return]b\nk.type=text\nk.text=x[return]y");
        assert!(!text.contains('\r'));
    }

    #[test]
    fn unset_fields_are_not_emitted() {
        let text = encode_component("tf", &Component::TextField(TextField::default()));
        assert_eq!(text, "tf.type=textfield\ntf.disabled=0\ntf.mandatory=0");
    }

    #[test]
    fn every_kind_emits_its_type_line() {
        let components = vec![
            Component::Button(Button::default()),
            Component::CancelButton(CancelButton::default()),
            Component::DefaultButton(DefaultButton::default()),
            Component::Checkbox(Checkbox::default()),
            Component::Combobox(Combobox::default()),
            Component::Date(Date::default()),
            Component::Image(Image::default()),
            Component::OpenBrowser(FileBrowser::default()),
            Component::SaveBrowser(FileBrowser::default()),
            Component::Password(Password::default()),
            Component::Popup(Choice::default()),
            Component::RadioButton(Choice::default()),
            Component::Text(Text::default()),
            Component::TextBox(TextBox::default()),
            Component::TextField(TextField::default()),
        ];
        for component in components {
            let text = encode_component("k", &component);
            let first = text.lines().next().unwrap();
            assert_eq!(first, format!("k.type={}", component.kind()));
        }
    }

    #[test]
    fn echo_round_trip_keeps_scalar_values() {
        let window = sample_window();
        let echoed = parse_output(&encode_window(&window));

        assert_eq!(echoed["*.title"], window.title);
        assert_eq!(echoed["*.autosavekey"], window.auto_save_key);
        assert_eq!(echoed["tf.label"], "Gib was ein");
        assert_eq!(echoed["tf.default"], "42");
        assert_eq!(echoed["tf.width"], "100");
        assert_eq!(echoed["cb.tooltip"], "Choose from the list");
        assert_eq!(echoed["cb.type"], "combobox");
        assert_eq!(echoed["dt.default"], "2020-07-04");
        assert_eq!(echoed["ok.label"], "OK");
    }
}
