// File: crates/indicator-demo/src/main.rs
// Summary: Demo renders a gallery of indicator states (offsets, vertical, degenerate ranges) to PNGs.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicator_core::{Color, Host, IndicatorState, LinearIndicator, Orientation, Palette, RenderOptions};

/// Counts the redraws the widget asks for, standing in for a real toolkit.
#[derive(Default)]
struct RecordingHost {
    requests: Cell<u32>,
}

impl Host for RecordingHost {
    fn request_redraw(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

struct Case {
    name: &'static str,
    opts: RenderOptions,
    state: IndicatorState,
}

fn main() -> Result<()> {
    env_logger::init();

    // Output directory from CLI or a default under target/
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/indicator_out"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output dir '{}'", out_dir.display()))?;
    println!("Writing to {}", out_dir.display());

    for case in gallery() {
        let img = indicator_core::render_with(&case.opts, &case.state)
            .with_context(|| format!("failed to render '{}'", case.name))?;
        let out = out_name(&out_dir, case.name);
        img.write_png(&out)
            .with_context(|| format!("failed to write '{}'", out.display()))?;
        println!("Wrote {} ({}x{})", out.display(), img.width(), img.height());
    }

    // Drive the widget the way a host would: mutate, then paint once.
    let host = RecordingHost::default();
    let mut widget = LinearIndicator::new(&host);
    widget.set_min(-100);
    widget.set_max(100);
    widget.set_offset(0);
    for v in [-40, -40, 10, 65, 65] {
        widget.set_value(v);
    }
    widget.set_vertical(true);
    widget.resize(60, 240);
    log::info!("widget requested {} redraws", host.requests.get());
    println!("Widget requested {} redraws", host.requests.get());

    let out = out_name(&out_dir, "widget_vertical");
    widget.paint()?.write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn gallery() -> Vec<Case> {
    let wide = RenderOptions::default();
    let tall = RenderOptions::default().with_size(50, 300);
    let base = IndicatorState::default();

    vec![
        Case { name: "default", opts: wide, state: base },
        Case { name: "offset_interval", opts: wide, state: base.with_value(30).with_offset(70) },
        Case {
            name: "centered_negative",
            opts: wide,
            state: base.with_range(-100, 100).with_offset(0).with_value(-60),
        },
        Case { name: "vertical", opts: tall, state: base.with_value(80).with_orientation(Orientation::Vertical) },
        Case { name: "zero_range", opts: wide, state: base.with_range(10, 10) },
        Case { name: "overflow", opts: wide, state: base.with_value(140) },
        Case { name: "thick_border", opts: wide, state: base.with_value(65).with_border_width(3.0) },
        Case {
            name: "custom_palette",
            opts: wide.with_background(Color::WHITE),
            state: base.with_value(42).with_palette(
                Palette::classic()
                    .with_bar(Color::from_rgb(255, 196, 92), Color::from_rgb(214, 96, 20))
                    .with_border(Color::from_rgb(90, 60, 40)),
            ),
        },
    ]
}

fn out_name(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("indicator_{name}.png"))
}
