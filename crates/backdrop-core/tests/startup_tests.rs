// Host-side tests for backend readiness and mode selection.

use backdrop_core::*;
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Sleep stand-in that records requested durations and returns immediately.
fn recording_sleep(
    log: &RefCell<Vec<Duration>>,
) -> impl FnMut(Duration) -> std::future::Ready<()> + '_ {
    move |d| {
        log.borrow_mut().push(d);
        std::future::ready(())
    }
}

#[test]
fn default_policy_gives_up_after_two_and_a_half_seconds() {
    let policy = PollPolicy::default();
    assert_eq!(policy.attempts, 50);
    assert_eq!(policy.interval, Duration::from_millis(50));
    assert_eq!(policy.deadline(), Duration::from_millis(2500));
}

#[test]
fn missing_backend_times_out_after_all_attempts() {
    let slept = RefCell::new(Vec::new());
    let probes = Cell::new(0u32);
    let result = pollster::block_on(wait_until_ready(
        || {
            probes.set(probes.get() + 1);
            false
        },
        recording_sleep(&slept),
        PollPolicy::default(),
    ));
    assert_eq!(result, Err(NotReady { attempts: 50 }));
    assert_eq!(probes.get(), 51);
    let total: Duration = slept.borrow().iter().sum();
    assert_eq!(total, Duration::from_millis(2500));
}

#[test]
fn present_backend_needs_no_sleep() {
    let slept = RefCell::new(Vec::new());
    let result = pollster::block_on(wait_until_ready(
        || true,
        recording_sleep(&slept),
        PollPolicy::default(),
    ));
    assert_eq!(result, Ok(0));
    assert!(slept.borrow().is_empty());
}

#[test]
fn late_backend_is_picked_up_mid_poll() {
    let slept = RefCell::new(Vec::new());
    let probes = Cell::new(0u32);
    let result = pollster::block_on(wait_until_ready(
        || {
            probes.set(probes.get() + 1);
            probes.get() > 3
        },
        recording_sleep(&slept),
        PollPolicy::default(),
    ));
    assert_eq!(result, Ok(3));
    assert_eq!(slept.borrow().len(), 3);
}

#[test]
fn select_mode_falls_back_when_backend_never_appears() {
    let slept = RefCell::new(Vec::new());
    let init_called = Cell::new(false);
    let mode: Mode<()> = pollster::block_on(select_mode(
        || false,
        recording_sleep(&slept),
        PollPolicy::default(),
        || {
            init_called.set(true);
            async { Ok(()) }
        },
    ));
    match mode {
        Mode::Fallback(FallbackReason::LibraryUnavailable(e)) => assert_eq!(e.attempts, 50),
        other => panic!("unexpected mode {other:?}"),
    }
    assert!(!init_called.get());
}

#[test]
fn select_mode_falls_back_on_init_error() {
    let slept = RefCell::new(Vec::new());
    let mode: Mode<()> = pollster::block_on(select_mode(
        || true,
        recording_sleep(&slept),
        PollPolicy::default(),
        || async { Err(InitError::ShaderCompile("bad token".into())) },
    ));
    match mode {
        Mode::Fallback(FallbackReason::Init(InitError::ShaderCompile(msg))) => {
            assert_eq!(msg, "bad token")
        }
        other => panic!("unexpected mode {other:?}"),
    }
}

#[test]
fn select_mode_returns_renderer_on_success() {
    let slept = RefCell::new(Vec::new());
    let mode = pollster::block_on(select_mode(
        || true,
        recording_sleep(&slept),
        PollPolicy::default(),
        || async { Ok::<_, InitError>(7u8) },
    ));
    assert!(mode.is_accelerated());
    assert!(matches!(mode, Mode::Accelerated(7)));
}

#[test]
fn fallback_reasons_render_distinct_messages() {
    let a = FallbackReason::LibraryUnavailable(NotReady { attempts: 50 }).to_string();
    let b = FallbackReason::Init(InitError::Adapter).to_string();
    assert!(a.contains("50 polls"));
    assert!(b.contains("adapter"));
    assert_ne!(a, b);
}

#[test]
fn fallback_reason_forwards_to_underlying_error() {
    use std::error::Error;
    let inner = InitError::ShaderCompile("bad token".into());
    let reason = FallbackReason::Init(inner.clone());
    assert_eq!(reason.to_string(), inner.to_string());
    let not_ready = NotReady { attempts: 3 };
    let reason = FallbackReason::LibraryUnavailable(not_ready);
    assert_eq!(reason.to_string(), not_ready.to_string());
    assert!(reason.source().is_none());
}
