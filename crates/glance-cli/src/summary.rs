use console::Style;
use glance_core::detect::DetectedRegion;
use glance_core::geometry::BoundingBox;
use glance_core::overlay::OverlayResult;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    text: Style,
    translation: Style,
    fallback: Style,
    error: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            text: Style::new().white(),
            translation: Style::new().green(),
            fallback: Style::new().dim().yellow(),
            error: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

fn format_box(b: &BoundingBox) -> String {
    format!(
        "({:.0}, {:.0}) {:.0}x{:.0}",
        b.x, b.y, b.width, b.height
    )
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

pub fn print_regions(source: &str, regions: &[DetectedRegion]) {
    let s = Styles::new();
    print_title(&s, "Text Regions");
    println!("  {:<10}{}", s.label.apply_to("Source"), s.path.apply_to(source));
    println!("  {:<10}{}", s.label.apply_to("Found"), s.value.apply_to(regions.len()));
    println!();
    for (i, region) in regions.iter().enumerate() {
        println!(
            "    {:>3}. {}  {}",
            s.label.apply_to(i + 1),
            s.value.apply_to(format_box(&region.bbox)),
            s.label.apply_to(format!(
                "{}x{} tiles",
                region.tile_width, region.tile_height
            ))
        );
    }
    println!();
}

pub fn print_results(source: &str, results: &[OverlayResult]) {
    let s = Styles::new();
    print_title(&s, "Overlay");
    println!("  {:<10}{}", s.label.apply_to("Source"), s.path.apply_to(source));
    println!("  {:<10}{}", s.label.apply_to("Items"), s.value.apply_to(results.len()));
    println!();

    for (i, r) in results.iter().enumerate() {
        let placement = if r.is_fallback {
            s.fallback.apply_to("fallback".to_string())
        } else {
            s.label.apply_to(format!("{} {}", r.space, format_box(&r.bbox)))
        };
        println!("    {:>3}. {}", s.label.apply_to(i + 1), placement);
        if r.loading {
            println!("         {}", s.fallback.apply_to("still loading"));
            continue;
        }
        if r.text == glance_core::consts::ERROR_TEXT {
            println!("         {}", s.error.apply_to(&r.translation));
            continue;
        }
        println!("         {}", s.text.apply_to(&r.text));
        println!("         {}", s.translation.apply_to(&r.translation));
    }
    println!();
}
