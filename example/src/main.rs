//! Drives a headless slider through a scripted drag and prints each frame.
//!
//! Usage: `rangeslider-example [options.toml]`. Set `RUST_LOG=debug` to see
//! the slider's own tracing.

use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use rangeslider::{
    CHANGE_EVENT, ChangeEvent, EventTarget, HeadlessSurface, HostElement, MemoryHost, Px,
    RangeSlider, SliderEvent, SliderOptions, VisualFrame,
};
use tracing::info;

const TRACK_WIDTH: i32 = 420;
const HANDLE_WIDTH: i32 = 20;
const COLUMNS: usize = 40;

fn main() -> Result<()> {
    init_tracing();

    let options = match env::args().nth(1) {
        Some(path) => load_options(Path::new(&path))?,
        None => SliderOptions::default().extra_bar_class("rangeslider__buffer"),
    };
    let options = options.on_slide(|e| {
        println!("  slide  value={:<5} position={:.3}", e.value, e.position);
    });

    let host = MemoryHost::new()
        .with_attribute("min", "0")
        .with_attribute("max", "100")
        .with_attribute("step", "5")
        .with_attribute("data-buffer", "60")
        .with_value("20");
    let surface = HeadlessSurface::new(Px(TRACK_WIDTH), Px(HANDLE_WIDTH));

    let Some(mut slider) = rangeslider::rangeslider(host.clone(), surface, options)? else {
        info!("native range control available, nothing to do");
        return Ok(());
    };
    info!(id = %slider.id(), value = slider.value(), "slider ready");
    print_frame(&slider);

    drag(&mut slider, &[40, 120, 200, 280, 360, 500]);
    print_frame(&slider);
    println!("host value: {}", host.value());
    for event in host.take_dispatched() {
        println!("  host event {:<6} from {:?}", event.name, event.origin);
    }

    let mut writer = host.clone();
    writer.set_value("33");
    slider.dispatch(
        EventTarget::Host,
        &SliderEvent::change(ChangeEvent::external(CHANGE_EVENT)),
    );
    println!("after external write of 33: value {}", slider.value());
    print_frame(&slider);

    slider.destroy();
    info!(concealed = host.is_concealed(), "slider destroyed");
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,rangeslider=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn load_options(path: &Path) -> Result<SliderOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid slider options in {}", path.display()))
}

/// Presses the handle at its center and moves the pointer through `xs`.
fn drag(slider: &mut RangeSlider<MemoryHost, HeadlessSurface>, xs: &[i32]) {
    let start = Px(
        (slider.geometry().content_width().to_f64() * slider.position()) as i32 + HANDLE_WIDTH / 2,
    );
    slider.dispatch(EventTarget::Track, &SliderEvent::pointer("pointerdown", start));
    let mut last = start;
    for &x in xs {
        last = Px(x);
        slider.dispatch(EventTarget::Document, &SliderEvent::pointer("pointermove", last));
    }
    slider.dispatch(EventTarget::Document, &SliderEvent::pointer("pointerup", last));
}

fn print_frame(slider: &RangeSlider<MemoryHost, HeadlessSurface>) {
    if let Some(frame) = slider.surface().last_frame() {
        println!("[{}] {:>5}", track_line(frame), slider.value());
    }
}

/// One character per column: `=` filled, `o` handle, `-` extra bar, space empty.
fn track_line(frame: &VisualFrame) -> String {
    let column = |percent: f64| ((percent / 100.0) * (COLUMNS - 1) as f64).round() as usize;
    let handle = column(frame.handle_percent);
    let extra = frame.extra_percent.map(column);
    (0..COLUMNS)
        .map(|i| {
            if i == handle {
                'o'
            } else if i < handle {
                '='
            } else if extra.is_some_and(|end| i <= end) {
                '-'
            } else {
                ' '
            }
        })
        .collect()
}
