use crate::Colors;

#[test]
fn paint_wraps_only_when_on() {
    assert_eq!(Colors::OFF.paint(Colors::OFF.symbol, "@main"), "@main");

    let c = Colors::ON;
    assert_eq!(c.paint(c.symbol, "@main"), "\x1b[34m@main\x1b[0m");
    assert_eq!(Colors::new(false), Colors::default());
}
