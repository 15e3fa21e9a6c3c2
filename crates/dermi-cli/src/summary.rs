use std::time::Duration;

use console::Style;
use dermi_core::analysis::Analysis;
use dermi_core::config::UploadConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

pub fn print_analysis(analysis: &Analysis, config: &UploadConfig, elapsed: Duration) {
    let s = Styles::new();
    let round = config.round_color_channels;

    println!();
    println!("  {}", s.title.apply_to("Skin Analysis"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(13)));
    println!();

    match analysis.erythema_index {
        Some(ei) => println!(
            "  {:<16}{}",
            s.label.apply_to("Erythema index"),
            s.value.apply_to(ei)
        ),
        None => println!(
            "  {:<16}{}",
            s.label.apply_to("Erythema index"),
            s.disabled.apply_to("not returned")
        ),
    }

    if let Some(ref rgb) = analysis.rgb {
        println!(
            "  {:<16}{}",
            s.label.apply_to("Median color"),
            s.value.apply_to(rgb.caption(round))
        );
    }

    if let Some(ref lab) = analysis.lab {
        println!(
            "  {:<16}{}",
            s.label.apply_to("CIE Lab"),
            s.value.apply_to(lab.summary())
        );
    }

    match analysis.image {
        Some(_) => println!(
            "  {:<16}{}",
            s.label.apply_to("Result image"),
            s.value.apply_to("returned (use --save-image to keep it)")
        ),
        None => println!(
            "  {:<16}{}",
            s.label.apply_to("Result image"),
            s.disabled.apply_to("none")
        ),
    }

    println!();
    println!(
        "  {:<16}{:.2}s",
        s.label.apply_to("Elapsed"),
        elapsed.as_secs_f32()
    );
    println!();
}
