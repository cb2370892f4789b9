use clap::Parser;
use palette::color::{ColorValue, Rgb, format_channel};

const INVALID_COLOR_HINT: &str = "Error: Invalid color format. Use 'R,G,B', a single value between 0 and 255, or a hex value (e.g., '0x64').";

#[derive(Parser, Debug)]
#[command(
    name = "color-adjust",
    about = "Adjust the brightness of an RGB color or a single channel"
)]
struct Cli {
    /// Input color: 'R,G,B' (e.g. '255,255,120'), a single 0-255 value, or
    /// a hex value (e.g. '0x64').
    #[arg(allow_negative_numbers = true)]
    color: String,

    /// Intensity adjustment factor: -0.33 darkens by 33%, 0.2 brightens by 20%.
    #[arg(allow_negative_numbers = true)]
    intensity: f64,
}

fn main() {
    let cli = Cli::parse();

    // Invalid colors report on stdout and exit 0, outside clap's usage-error path.
    let Ok(color) = cli.color.parse::<ColorValue>() else {
        println!("{INVALID_COLOR_HINT}");
        return;
    };

    print_color("Original", color);
    print_color("Adjusted", color.adjust(cli.intensity));
}

fn print_color(label: &str, color: ColorValue) {
    match color {
        ColorValue::Channel(value) => println!("{label} channel: {}", format_channel(value)),
        ColorValue::Rgb(rgb) => println!("{label} color: rgb({})", detailed_channels(rgb)),
    }
}

fn detailed_channels(rgb: Rgb) -> String {
    [rgb.r, rgb.g, rgb.b]
        .map(format_channel)
        .join(", ")
}
