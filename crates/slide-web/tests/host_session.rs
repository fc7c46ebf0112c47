//! Recorded host sessions driven through `SlideHost`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use slide_core::geometry::uniform_strip;
use slide_web::{
    HostCommand, HostIgnoredReason, HostInput, HostOutcome, ListenerKind, MemorySurface,
    SlideHost,
};
use slide_widgets::{NavControls, SlideConfig, SlideEffect, SlideEngine, SwipeOutcome};

fn mounted_host(count: usize) -> SlideHost<MemorySurface> {
    let surface = MemorySurface::new(300.0, uniform_strip(count, 100.0));
    let mut host = SlideHost::new(SlideEngine::new(surface, SlideConfig::default()));
    host.mount().expect("panels present");
    host
}

#[derive(Debug, Default)]
struct FakeDom {
    installed: Vec<ListenerKind>,
    prevented: usize,
}

impl FakeDom {
    fn apply(&mut self, commands: &[HostCommand]) {
        for command in commands {
            match *command {
                HostCommand::Listen { kind, .. } => self.installed.push(kind),
                HostCommand::Unlisten { kind, .. } => {
                    let pos = self
                        .installed
                        .iter()
                        .position(|&k| k == kind)
                        .expect("unlisten of an installed listener");
                    self.installed.remove(pos);
                }
                HostCommand::PreventDefault => self.prevented += 1,
            }
        }
    }
}

#[test]
fn touch_swipe_session() {
    let mut host = mounted_host(3);
    let mut dom = FakeDom::default();
    dom.installed.extend(ListenerKind::MOUNTED);

    let script = [
        HostInput::TouchStart {
            changed_touches: vec![250.0],
        },
        HostInput::TouchMove {
            changed_touches: vec![200.0],
        },
        HostInput::TouchMove {
            changed_touches: vec![150.0],
        },
        HostInput::TouchEnd,
    ];
    let mut effects = Vec::new();
    for input in &script {
        host.clock_mut().advance(Duration::from_millis(16));
        let dispatch = host.dispatch(input);
        dom.apply(&dispatch.commands);
        effects.push(dispatch.effect);
    }

    assert_eq!(
        effects.last().copied().flatten(),
        Some(SlideEffect::Settled {
            outcome: SwipeOutcome::Next,
            active: 1,
            movement: -150.0
        })
    );
    assert_eq!(dom.installed, ListenerKind::MOUNTED.to_vec());
    assert_eq!(dom.prevented, 0);

    let engine = host.engine().borrow();
    assert_eq!(engine.surface().translation(), 0.0);
    assert_eq!(engine.surface().active(), Some(1));
}

#[test]
fn mouse_session_prevents_default_once_per_press() {
    let mut host = mounted_host(3);
    let mut dom = FakeDom::default();
    dom.installed.extend(ListenerKind::MOUNTED);

    for _ in 0..2 {
        for input in [
            HostInput::MouseDown { client_x: 0.0 },
            HostInput::MouseMove { client_x: -90.0 },
            HostInput::MouseUp,
        ] {
            dom.apply(&host.dispatch(&input).commands);
        }
    }
    assert_eq!(dom.prevented, 2);
    assert_eq!(host.engine().borrow().active(), Some(2));
    assert_eq!(dom.installed.len(), 5);
}

#[test]
fn moves_after_end_are_not_delivered() {
    let mut host = mounted_host(3);
    host.dispatch(&HostInput::MouseDown { client_x: 0.0 });
    host.dispatch(&HostInput::MouseUp);
    let late = host.dispatch(&HostInput::MouseMove { client_x: 500.0 });
    assert_eq!(
        late.outcome,
        HostOutcome::Ignored(HostIgnoredReason::NoMoveListener)
    );
    assert_eq!(host.engine().borrow().surface().translation(), 100.0);
}

#[test]
fn resize_burst_relayouts_once_on_tick() {
    let mut host = mounted_host(3);
    host.engine().borrow_mut().navigate(1).expect("in range");

    for width in [320.0, 360.0, 400.0] {
        host.engine()
            .borrow_mut()
            .surface_mut()
            .set_viewport_width(width);
        host.dispatch(&HostInput::Resize { width });
        host.clock_mut().advance(Duration::from_millis(50));
        assert_eq!(host.tick(), Ok(false));
    }
    host.clock_mut().advance(Duration::from_millis(150));
    assert_eq!(host.tick(), Ok(true));
    assert_eq!(host.tick(), Ok(false));

    // viewport 400: -(100 - 150)
    assert_eq!(host.engine().borrow().surface().translation(), 50.0);
}

#[test]
fn controls_follow_host_swipes() {
    let mut host = mounted_host(4);
    let nav = NavControls::attach(Rc::clone(host.engine()));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    nav.on_highlight(move |_, new| sink.borrow_mut().push(new));

    for input in [
        HostInput::MouseDown { client_x: 300.0 },
        HostInput::MouseMove { client_x: 200.0 },
        HostInput::MouseUp,
    ] {
        host.dispatch(&input);
    }
    nav.go_to(3).expect("in range");
    assert_eq!(*seen.borrow(), vec![1, 3]);
    assert_eq!(nav.len(), 4);
}

#[test]
fn dispose_tears_down_all_listeners_and_subscriptions() {
    let mut host = mounted_host(3);
    let nav = NavControls::attach(Rc::clone(host.engine()));
    let mut dom = FakeDom::default();
    dom.installed.extend(ListenerKind::MOUNTED);
    dom.apply(&host.dispatch(&HostInput::MouseDown { client_x: 0.0 }).commands);

    dom.apply(&host.dispose());
    assert!(dom.installed.is_empty());
    assert_eq!(host.engine().borrow().listener_count(), 0);
    assert_eq!(
        host.dispatch(&HostInput::TouchEnd).outcome,
        HostOutcome::Ignored(HostIgnoredReason::NotMounted)
    );
    drop(nav);
}

#[cfg(feature = "tracing")]
mod tracing_capture {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    struct MessageCapture {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl<S> Layer<S> for MessageCapture
    where
        S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            struct Visitor(Option<String>);
            impl tracing::field::Visit for Visitor {
                fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                    if field.name() == "message" {
                        self.0 = Some(value.to_string());
                    }
                }

                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    if field.name() == "message" && self.0.is_none() {
                        self.0 = Some(format!("{value:?}").trim_matches('"').to_string());
                    }
                }
            }
            let mut visitor = Visitor(None);
            event.record(&mut visitor);
            if let Some(message) = visitor.0 {
                self.messages.lock().expect("capture lock").push(message);
            }
        }
    }

    #[test]
    fn listener_lifecycle_is_traced() {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(MessageCapture {
            messages: Arc::clone(&messages),
        });
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut host = mounted_host(2);
        host.dispatch(&HostInput::MouseDown { client_x: 0.0 });
        host.dispatch(&HostInput::MouseUp);
        host.dispose();

        let messages = messages.lock().expect("capture lock");
        let count = |m: &str| messages.iter().filter(|x| x.as_str() == m).count();
        assert_eq!(count("slide.host.listen"), 6);
        assert_eq!(count("slide.host.unlisten"), 6);
        assert!(count("slide.navigate") >= 2);
    }
}
