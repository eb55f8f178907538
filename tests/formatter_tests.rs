use hudfmt::{Config, FormatError, Formatter, NativeTypeNames, TypeRegistry};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

struct Coin;
struct Gem;

#[test]
fn test_default_formatter() {
    let fmt = Formatter::default();

    assert_eq!(fmt.time(63.256), "1:03");
    assert_eq!(fmt.money(1234567.891), "1,234,567.89");
    assert_eq!(fmt.html("hp"), "<font size='12' color='#FFFFFF'>hp</font>");
    assert_eq!(
        fmt.class_name(&NativeTypeNames, Some(&Coin)).as_deref(),
        Some("Coin")
    );
}

#[test]
fn test_formatter_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("hudfmt.toml");
    fs::write(
        &path,
        r#"
[time]
show_milliseconds = true

[money]
english_style = false

[html]
size = 10
color = "FF8800"
underlined = true

[reflection]
simple_names = false
"#,
    )?;

    let fmt = Formatter::from_file(&path)?;

    assert_eq!(fmt.time(3661.5), "61:01.50");
    assert_eq!(fmt.money(9876543.21), "9.876.543,21");
    assert_eq!(
        fmt.html("low"),
        "<u><font size='10' color='#FF8800'>low</font></u>"
    );

    let registry = TypeRegistry::new()
        .with::<Coin>("loot::Coin")
        .with::<Gem>("loot::Gem");
    assert_eq!(
        fmt.class_name(&registry, Some(&Gem)).as_deref(),
        Some("loot.Gem")
    );
    assert!(!fmt.same_class_name(&registry, Some(&Coin), Some(&Gem)));
    assert!(fmt.same_class_name(&registry, Some(&Coin), Some(&Coin)));

    Ok(())
}

#[test]
fn test_formatter_from_missing_file() {
    let result = Formatter::from_file("/nonexistent/hudfmt.toml");
    assert!(matches!(result, Err(FormatError::Io(_))));
}

#[test]
fn test_saved_config_reloads_identically() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("saved.toml");

    let mut config = Config::default();
    config.html.bold = true;
    config.money.show_decimal = false;
    hudfmt::save_config(&path, &config)?;

    let fmt = Formatter::from_file(&path)?;
    assert_eq!(fmt.config(), &config);
    assert_eq!(fmt.money(1500.99), "1,500");
    assert_eq!(fmt.html("!"), "<b><font size='12' color='#FFFFFF'>!</font></b>");

    Ok(())
}

#[test]
fn test_repeated_calls_are_identical() {
    let fmt = Formatter::default();
    let first: Vec<String> = (0..3).map(|_| fmt.money(0.99)).collect();
    assert!(first.iter().all(|s| s == ".99"));
}
