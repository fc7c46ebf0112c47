#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slide_core::geometry::uniform_strip;
use slide_web::{HostCommand, HostInput, ListenerKind, MemorySurface, SlideHost};
use slide_widgets::{SlideConfig, SlideEngine};
use std::time::Duration;

#[derive(Debug, Arbitrary)]
enum RawInput {
    MouseDown(i16),
    MouseMove(i16),
    MouseUp,
    TouchStart(Vec<i16>),
    TouchMove(Vec<i16>),
    TouchEnd,
    Resize(u16),
    Advance(u16),
    Tick,
}

fn touches(raw: &[i16]) -> Vec<f64> {
    raw.iter().take(4).map(|&x| f64::from(x)).collect()
}

fuzz_target!(|inputs: Vec<RawInput>| {
    let surface = MemorySurface::new(300.0, uniform_strip(4, 100.0));
    let mut host = SlideHost::new(SlideEngine::new(surface, SlideConfig::default()));
    let mut installed: Vec<ListenerKind> = Vec::new();
    let mount = host.mount().expect("panels present");
    apply(&mut installed, &mount);

    for raw in inputs.into_iter().take(512) {
        let input = match raw {
            RawInput::MouseDown(x) => HostInput::MouseDown { client_x: f64::from(x) },
            RawInput::MouseMove(x) => HostInput::MouseMove { client_x: f64::from(x) },
            RawInput::MouseUp => HostInput::MouseUp,
            RawInput::TouchStart(t) => HostInput::TouchStart { changed_touches: touches(&t) },
            RawInput::TouchMove(t) => HostInput::TouchMove { changed_touches: touches(&t) },
            RawInput::TouchEnd => HostInput::TouchEnd,
            RawInput::Resize(w) => HostInput::Resize { width: f64::from(w) },
            RawInput::Advance(dt) => {
                host.clock_mut().advance(Duration::from_millis(u64::from(dt)));
                continue;
            }
            RawInput::Tick => {
                let _ = host.tick();
                continue;
            }
        };
        let dispatch = host.dispatch(&input);
        apply(&mut installed, &dispatch.commands);
        assert_eq!(installed.len(), host.listeners().len(), "listener set diverged");
        assert!(installed.len() <= 6, "at most one move listener");
    }

    apply(&mut installed, &host.dispose());
    assert!(installed.is_empty(), "dispose leaked listeners");
});

fn apply(installed: &mut Vec<ListenerKind>, commands: &[HostCommand]) {
    for command in commands {
        match *command {
            HostCommand::Listen { kind, .. } => installed.push(kind),
            HostCommand::Unlisten { kind, .. } => {
                let pos = installed
                    .iter()
                    .position(|&k| k == kind)
                    .expect("unlisten of unknown listener");
                installed.remove(pos);
            }
            HostCommand::PreventDefault => {}
        }
    }
}
