use crate::{
    options::SliderClasses,
    range::cap,
    surface::{Surface, VisualFrame},
};

/// Builds the frame for a primary position and an optional extra bar
/// position, both normalized.
pub(super) fn frame(position: f64, extra: Option<f64>) -> VisualFrame {
    let percent = to_percent(position);
    VisualFrame {
        fill_percent: percent,
        handle_percent: percent,
        extra_percent: extra.map(to_percent),
    }
}

pub(super) fn render_disabled<S: Surface>(
    surface: &mut S,
    classes: &SliderClasses,
    disabled: bool,
) {
    surface.set_class(&classes.disabled, disabled);
}

pub(super) fn render_active<S: Surface>(surface: &mut S, classes: &SliderClasses, active: bool) {
    surface.set_class(&classes.active, active);
}

fn to_percent(position: f64) -> f64 {
    if position.is_nan() {
        return 0.0;
    }
    cap(position, 0.0, 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_uses_percentages() {
        let f = frame(0.25, Some(0.8));
        assert_eq!(f.fill_percent, 25.0);
        assert_eq!(f.handle_percent, 25.0);
        assert_eq!(f.extra_percent, Some(80.0));
    }

    #[test]
    fn frame_clamps_out_of_range_positions() {
        let f = frame(1.5, Some(-0.2));
        assert_eq!(f.handle_percent, 100.0);
        assert_eq!(f.extra_percent, Some(0.0));
        assert_eq!(frame(f64::NAN, None).fill_percent, 0.0);
    }
}
