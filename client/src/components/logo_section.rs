//! Bridge component between the Leptos UI and the imperative `logo::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns the logo lifecycle. This host forwards DOM events into it,
//! performs the actions it returns (frame loop, deferred reset, cursor), and
//! copies published poses into `LogoViewState` for rendering. Server rendering
//! draws the letters at the origin fallback until the browser measures them.

use leptos::prelude::*;

use logo::config::LogoConfig;
use logo::glyph::LETTERS;

use crate::state::logo_view::{LogoViewState, letter_style};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use logo::engine::{Action, Engine, Phase};
#[cfg(feature = "hydrate")]
use logo::input::Button;
#[cfg(feature = "hydrate")]
use logo::layout::Point;

#[cfg(feature = "hydrate")]
use crate::util::animation_frame::AnimationFrameLoop;

/// Engine plus the frame loop it asked for. Lives only in the browser.
#[cfg(feature = "hydrate")]
struct LogoHost {
    engine: Engine,
    frames: Option<AnimationFrameLoop>,
}

#[cfg(feature = "hydrate")]
type HostStore = StoredValue<Option<LogoHost>, LocalStorage>;

#[cfg(feature = "hydrate")]
fn apply_actions(host: &mut LogoHost, actions: Vec<Action>, store: HostStore, view: RwSignal<LogoViewState>) {
    for action in actions {
        match action {
            Action::StartFrameLoop => {
                host.frames = AnimationFrameLoop::start(move || step_frame(store));
                if host.frames.is_none() {
                    log::warn!("no animation frames available; logo will not move");
                }
            }
            Action::CancelFrameLoop => {
                if let Some(frames) = host.frames.take() {
                    frames.cancel();
                }
            }
            Action::ScheduleReset => {
                Timeout::new(0, move || finish_reset(store, view)).forget();
            }
            Action::SetCursor(cursor) => view.update(|v| v.cursor = Some(cursor)),
        }
    }
    sync_phase(host, view);
}

#[cfg(feature = "hydrate")]
fn sync_phase(host: &LogoHost, view: RwSignal<LogoViewState>) {
    let active = host.engine.core.phase() != Phase::Idle;
    if view.with_untracked(|v| v.active) != active {
        view.update(|v| {
            v.active = active;
            if !active {
                v.cursor = None;
            }
        });
    }
}

#[cfg(feature = "hydrate")]
fn step_frame(store: HostStore) -> bool {
    store
        .try_update_value(|host| host.as_mut().is_some_and(|h| h.engine.on_frame()))
        .unwrap_or(false)
}

#[cfg(feature = "hydrate")]
fn finish_reset(store: HostStore, view: RwSignal<LogoViewState>) {
    store.try_update_value(|host| {
        if let Some(host) = host.as_mut()
            && host.engine.complete_reset()
        {
            sync_phase(host, view);
        }
    });
}

/// Run `f` against the mounted engine and carry out the actions it returns.
#[cfg(feature = "hydrate")]
fn with_engine(store: HostStore, view: RwSignal<LogoViewState>, f: impl FnOnce(&mut Engine) -> Vec<Action>) {
    store.try_update_value(|host| {
        if let Some(host) = host.as_mut() {
            let actions = f(&mut host.engine);
            apply_actions(host, actions, store, view);
        }
    });
}

#[cfg(feature = "hydrate")]
fn container_point(ev: &leptos::ev::PointerEvent, container: &web_sys::HtmlDivElement) -> Point {
    let rect = container.get_bounding_client_rect();
    Point::new(f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top())
}

/// Logo area: the six letters, plus a full-size trigger until physics starts.
#[component]
pub fn LogoSection() -> impl IntoView {
    let logo_view = expect_context::<RwSignal<LogoViewState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let font = LogoConfig::default().layout.font;

    #[cfg(feature = "hydrate")]
    let store: HostStore = StoredValue::new_local(None);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(container) = container_ref.get() else {
                return;
            };
            if store.with_value(Option::is_some) {
                return;
            }
            let mut engine = Engine::new(container.into(), LogoConfig::default());
            engine.subscribe(move |poses| logo_view.update(|v| v.set_poses(poses)));
            engine.sync_viewport();
            engine.measure_letters();
            log::debug!("logo mounted at {:?}", engine.core.viewport());
            store.set_value(Some(LogoHost { engine, frames: None }));
        });

        let resize = window_event_listener(leptos::ev::resize, move |_| {
            with_engine(store, logo_view, Engine::on_resize);
        });

        on_cleanup(move || {
            resize.remove();
            store.try_update_value(|host| {
                if let Some(mut host) = host.take() {
                    let actions = host.engine.teardown();
                    apply_actions(&mut host, actions, store, logo_view);
                }
            });
        });
    }

    let on_activate = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                with_engine(store, logo_view, |engine| {
                    engine.activate().unwrap_or_else(|e| {
                        log::warn!("logo activation failed: {e}");
                        Vec::new()
                    })
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(container) = container_ref.get() else {
                    return;
                };
                let point = container_point(&ev, &container);
                let button = Button::from_dom(ev.button());
                with_engine(store, logo_view, |engine| engine.on_pointer_down(point, button));
                // Capturing while idle would retarget the trigger's click.
                if logo_view.with_untracked(|v| v.active)
                    && let Err(e) = container.set_pointer_capture(ev.pointer_id())
                {
                    log::debug!("pointer capture refused: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(container) = container_ref.get() else {
                    return;
                };
                let point = container_point(&ev, &container);
                with_engine(store, logo_view, |engine| engine.on_pointer_move(point));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::PointerEvent| {
                with_engine(store, logo_view, Engine::on_pointer_up);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let letters = LETTERS
        .iter()
        .copied()
        .enumerate()
        .map(|(index, glyph)| {
            let font = font.clone();
            let style = move || letter_style(&glyph, &font, &logo_view.with(|v| v.pose(index)));
            view! { <div class="logo-section__letter" style=style>{glyph.ch.to_string()}</div> }
        })
        .collect_view();

    view! {
        <div
            class="logo-section"
            node_ref=container_ref
            style:cursor=move || logo_view.with(|v| v.cursor_css().to_owned())
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
        >
            <div class="logo-section__letters" aria-hidden="true">
                {letters}
            </div>
            <Show when=move || !logo_view.with(|v| v.active)>
                <button
                    class="logo-section__trigger"
                    aria-label="Activate logo physics"
                    on:click=on_activate
                ></button>
            </Show>
        </div>
    }
}
