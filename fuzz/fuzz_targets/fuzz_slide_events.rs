#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slide_core::event::SlideEvent;
use slide_core::geometry::PanelGeometry;
use slide_widgets::{MemorySurface, SlideConfig, SlideEngine};
use std::time::Duration;

#[derive(Debug, Arbitrary)]
enum Op {
    PointerDown(i16),
    PointerMove(i16),
    PointerUp,
    TouchStart(i16),
    TouchMove(i16),
    TouchEnd,
    Resize(u16),
    Tick(u16),
    Navigate(u8),
    Prev,
    Next,
    SetPanels(Vec<(u16, u16)>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    viewport: u16,
    panels: Vec<(u16, u16)>,
    ops: Vec<Op>,
}

fn geometry(raw: &[(u16, u16)]) -> Vec<PanelGeometry> {
    raw.iter()
        .take(64)
        .map(|&(offset, width)| PanelGeometry::new(f64::from(offset), f64::from(width)))
        .collect()
}

fuzz_target!(|input: Input| {
    let surface = MemorySurface::new(f64::from(input.viewport), geometry(&input.panels));
    let mut engine = SlideEngine::new(surface, SlideConfig::default());
    if engine.mount().is_err() {
        assert!(input.panels.is_empty());
        return;
    }

    let mut now = Duration::ZERO;
    for op in input.ops.into_iter().take(512) {
        match op {
            Op::PointerDown(x) => {
                engine.handle_event(&SlideEvent::pointer_down(f64::from(x)), now);
            }
            Op::PointerMove(x) => {
                engine.handle_event(&SlideEvent::pointer_move(f64::from(x)), now);
            }
            Op::PointerUp => {
                engine.handle_event(&SlideEvent::pointer_up(), now);
            }
            Op::TouchStart(x) => {
                engine.handle_event(&SlideEvent::touch_start(f64::from(x)), now);
            }
            Op::TouchMove(x) => {
                engine.handle_event(&SlideEvent::touch_move(f64::from(x)), now);
            }
            Op::TouchEnd => {
                engine.handle_event(&SlideEvent::touch_end(), now);
            }
            Op::Resize(width) => {
                engine.surface_mut().set_viewport_width(f64::from(width));
                engine.handle_event(&SlideEvent::Resize { width: f64::from(width) }, now);
            }
            Op::Tick(dt) => {
                now += Duration::from_millis(u64::from(dt));
                let _ = engine.tick(now);
            }
            Op::Navigate(i) => {
                let len = engine.panels().len();
                assert_eq!(engine.navigate(usize::from(i)).is_ok(), usize::from(i) < len);
            }
            Op::Prev => {
                engine.previous();
            }
            Op::Next => {
                engine.next();
            }
            Op::SetPanels(raw) => engine.surface_mut().set_panels(geometry(&raw)),
        }

        // Post-conditions that must always hold:
        let state = engine.drag_state();
        assert_eq!(state.move_position, state.movement + state.final_position);
        if let Some(index) = engine.index() {
            assert!(index.active < engine.panels().len(), "active OOB");
            assert_eq!(index.prev, index.active.checked_sub(1));
        }
    }
});
