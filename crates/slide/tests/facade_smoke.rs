//! Facade wiring: prelude, config loading and a full host round.

use std::rc::Rc;

use slide::core::geometry::uniform_strip;
use slide::prelude::*;

#[test]
fn toml_config_drives_mounted_host() {
    let config = SlideConfig::from_toml_str("swipe_threshold = 40.0\ntransition_ms = 300\n")
        .expect("valid toml");
    let surface = MemorySurface::new(300.0, uniform_strip(5, 100.0));
    let (mut host, commands) = slide::mount(surface, config).expect("mounted");
    assert_eq!(commands.len(), 5);

    let nav = NavControls::attach(Rc::clone(host.engine()));
    host.dispatch(&HostInput::TouchStart {
        changed_touches: vec![100.0],
    });
    host.dispatch(&HostInput::TouchMove {
        changed_touches: vec![70.0],
    });
    host.dispatch(&HostInput::TouchEnd);

    assert_eq!(nav.highlighted(), Some(1));
    let engine = host.engine().borrow();
    assert_eq!(
        engine.surface().transition(),
        Some(std::time::Duration::from_millis(300))
    );
}

#[test]
fn config_errors_convert_into_facade_error() {
    fn load(src: &str) -> slide::Result<SlideConfig> {
        Ok(SlideConfig::from_json_str(src)?)
    }
    let err = load("{\"transition_ms\": 0}").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(load("not json").is_err());
}

#[test]
fn events_round_through_engine_directly() {
    let mut engine = SlideEngine::new(
        MemorySurface::new(300.0, uniform_strip(3, 100.0)),
        SlideConfig::default(),
    );
    engine.mount().expect("mounted");
    engine.navigate(2).expect("in range");
    assert!(engine.navigate(3).is_err());
    let event = SlideEvent::GestureStart {
        x: 0.0,
        origin: InputOrigin::Pointer,
    };
    assert!(matches!(
        engine.handle_event(&event, std::time::Duration::ZERO),
        slide::SlideEffect::GestureStarted { .. }
    ));
}
