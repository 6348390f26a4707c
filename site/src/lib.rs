// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The AI & DEV community link-in-bio page.
//!
//! Composes the pieces from `tidepool_core` and `tidepool_backend_web` into a
//! rendered page: validates the static [`REGISTRY`], applies the initial
//! theme, builds the DOM skeleton (particles, header, link list, footer,
//! theme toggle), mounts the reveal schedule, and arms one timeout per link.
//!
//! Build with: `wasm-pack build --target web site`
//!
//! Then serve `site/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use tidepool_backend_web::{
    ConsoleTrace, DomMetadataSink, DomRevealPresenter, LocalPreferences, TimeoutArena, activate,
    now,
};
use tidepool_core::backend::{RevealPresenter as _, commit_theme, load_theme};
use tidepool_core::link::{LinkAction, LinkId, LinkRecord, validate_registry};
use tidepool_core::particles::{PARTICLE_COUNT, particle_field};
use tidepool_core::reveal::RevealSchedule;
use tidepool_core::theme::ThemePreference;
use tidepool_core::time::Duration;
use tidepool_core::trace::{MountEvent, RevealEvent, ThemeEvent, Tracer};

const PAGE_HEADING: &str = "AI & DEV Community";
const PAGE_TAGLINE: &str = "Connect • Learn • Innovate";
const FOOTER_COPY: &str = "Join our growing community of AI & Development enthusiasts!";

/// The community's advertised destinations, in display order.
///
/// Reveal delays step by 200ms so the list fades in top-to-bottom.
const REGISTRY: [LinkRecord<'static>; 7] = [
    LinkRecord {
        platform: "Join Our Community",
        action: LinkAction::Navigate {
            url: "https://docs.google.com/forms/d/e/1FAIpQLSdu_abXzvs4gCvMcGVI3BvOTdo4Sn_tCop03G0CrhUkmEHYJA/viewform?usp=header",
        },
        reveal_delay: Duration::from_millis(100),
        highlighted: true,
    },
    LinkRecord {
        platform: "Instagram",
        action: LinkAction::Navigate {
            url: "https://www.instagram.com/aidev_communityfsbm",
        },
        reveal_delay: Duration::from_millis(300),
        highlighted: false,
    },
    LinkRecord {
        platform: "Facebook",
        action: LinkAction::Navigate {
            url: "https://www.facebook.com/share/G6KF7b56dSLF2SYh/?mibextid=qi2Omg",
        },
        reveal_delay: Duration::from_millis(500),
        highlighted: false,
    },
    LinkRecord {
        platform: "LinkedIn",
        action: LinkAction::Navigate {
            url: "https://www.linkedin.com/company/ai-dev-community/",
        },
        reveal_delay: Duration::from_millis(700),
        highlighted: false,
    },
    LinkRecord {
        platform: "WhatsApp",
        action: LinkAction::Navigate {
            url: "https://chat.whatsapp.com/Ftvj3lJBgCy6MtLwGeM2kv",
        },
        reveal_delay: Duration::from_millis(900),
        highlighted: false,
    },
    LinkRecord {
        platform: "TikTok",
        action: LinkAction::Navigate {
            url: "https://www.tiktok.com/@ai.dev.community",
        },
        reveal_delay: Duration::from_millis(1100),
        highlighted: false,
    },
    LinkRecord {
        platform: "Gmail",
        action: LinkAction::Email {
            address: "communityaidev@gmail.com",
        },
        reveal_delay: Duration::from_millis(1300),
        highlighted: false,
    },
];

/// Icon glyph per registry slot (presentation only).
const ICONS: [&str; 7] = ["✚", "◉", "ƒ", "in", "✆", "♫", "✉"];

struct PageState {
    theme: ThemePreference,
    store: LocalPreferences,
    sink: DomMetadataSink,
    schedule: RevealSchedule,
    presenter: DomRevealPresenter,
    timers: TimeoutArena,
    toggle_button: HtmlElement,
    trace: ConsoleTrace,
}

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");
    let body = document.body().expect("no body");

    // Static data fails fast, before anything renders.
    validate_registry(&REGISTRY).map_err(|e| JsValue::from_str(&format!("{e}")))?;

    // Theme first so nothing paints with the wrong palette. The commit also
    // writes the resolved preference back, so a corrupt stored value is
    // repaired on load.
    let mut store = LocalPreferences::new();
    let theme = load_theme(&store);
    let mut sink = DomMetadataSink::new(document.clone());
    commit_theme(theme, &mut store, &mut sink);

    body.append_child(&create_particles(&document)?)?;

    let toggle_button = create_toggle_button(&document, theme)?;
    body.append_child(&toggle_button)?;

    let container = el_with_class(&document, "div", "container")?;
    container.append_child(&create_header(&document)?)?;

    let links_container = el_with_class(&document, "div", "links-container")?;
    let mut presenter = DomRevealPresenter::new();
    for (i, record) in REGISTRY.iter().enumerate() {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the registry has seven entries"
        )]
        let link = LinkId(i as u32);
        let el = create_link(&document, record, ICONS[i])?;
        attach_activation(&el, &record.action);
        links_container.append_child(&el)?;
        presenter.register(link, el);
    }
    container.append_child(&links_container)?;
    container.append_child(&create_footer(&document)?)?;
    body.append_child(&container)?;

    // Mount the reveal schedule and arm one timeout per link. Each timeout
    // polls the schedule with the current time, so a timer that fires early
    // (or a cancelled mount) cannot reveal anything the schedule disagrees
    // with.
    let mounted_at = now();
    let schedule = RevealSchedule::mount(&REGISTRY.map(|r| r.reveal_delay), mounted_at);

    let mut trace = ConsoleTrace;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the registry has seven entries"
    )]
    Tracer::new(&mut trace).mount(&MountEvent {
        links: REGISTRY.len() as u32,
        at: mounted_at,
    });

    let state = Rc::new(RefCell::new(PageState {
        theme,
        store,
        sink,
        schedule,
        presenter,
        timers: TimeoutArena::new(),
        toggle_button: toggle_button.clone(),
        trace,
    }));

    for (i, record) in REGISTRY.iter().enumerate() {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the registry has seven entries"
        )]
        let link = LinkId(i as u32);
        let state_cb = Rc::clone(&state);
        state.borrow_mut().timers.schedule(link, record.reveal_delay, move || {
            let mut s = state_cb.borrow_mut();
            let at = now();
            let changes = s.schedule.due(at);
            // Destructure to satisfy the borrow checker: mutable presenter +
            // trace.
            let PageState {
                ref mut presenter,
                ref mut trace,
                ..
            } = *s;
            presenter.apply(&changes);
            let mut tracer = Tracer::new(trace);
            for &link in &changes.revealed {
                tracer.reveal(&RevealEvent { link, at });
            }
        });
    }

    attach_toggle(&toggle_button, &state);

    // Keep the page state alive — there is no graceful shutdown on the web.
    core::mem::forget(state);

    Ok(())
}

fn el_with_class(doc: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element(tag)?.unchecked_into();
    el.set_class_name(class);
    Ok(el)
}

fn create_particles(doc: &Document) -> Result<HtmlElement, JsValue> {
    let container = el_with_class(doc, "div", "particles-container")?;
    let mut sample = || js_sys::Math::random();
    for spec in particle_field(PARTICLE_COUNT, &mut sample) {
        let particle = el_with_class(doc, "div", "particle")?;
        let s = particle.style();
        s.set_property("left", &format!("{}%", spec.left_pct))?;
        s.set_property("top", &format!("{}%", spec.top_pct))?;
        s.set_property("animation-delay", &format!("{}s", spec.delay_s))?;
        s.set_property("animation-duration", &format!("{}s", spec.duration_s))?;
        container.append_child(&particle)?;
    }
    Ok(container)
}

fn create_header(doc: &Document) -> Result<HtmlElement, JsValue> {
    let header = el_with_class(doc, "div", "header")?;

    let logo_container = el_with_class(doc, "div", "logo-container")?;
    let logo: HtmlElement = doc.create_element("img")?.unchecked_into();
    logo.set_class_name("logo");
    logo.set_attribute("src", "/logo.png")?;
    logo.set_attribute("alt", "AI & DEV Community Logo")?;
    // A missing logo keeps the placeholder glow and never blocks the page.
    let logo_err = logo.clone();
    let on_error = Closure::wrap(Box::new(move || {
        let _ = logo_err.class_list().add_1("logo-missing");
    }) as Box<dyn FnMut()>);
    logo.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();
    logo_container.append_child(&logo)?;
    logo_container.append_child(&el_with_class(doc, "div", "logo-glow")?)?;
    header.append_child(&logo_container)?;

    let title = el_with_class(doc, "h1", "title")?;
    title.set_text_content(Some(PAGE_HEADING));
    header.append_child(&title)?;

    let subtitle = el_with_class(doc, "p", "subtitle")?;
    subtitle.set_text_content(Some(PAGE_TAGLINE));
    header.append_child(&subtitle)?;

    Ok(header)
}

fn create_link(
    doc: &Document,
    record: &LinkRecord<'_>,
    icon: &str,
) -> Result<HtmlElement, JsValue> {
    let class = if record.highlighted {
        "social-link highlighted"
    } else {
        "social-link"
    };
    let el = el_with_class(doc, "div", class)?;

    let icon_el = el_with_class(doc, "div", "link-icon")?;
    icon_el.set_text_content(Some(icon));
    el.append_child(&icon_el)?;

    let text = el_with_class(doc, "span", "link-text")?;
    text.set_text_content(Some(record.platform));
    el.append_child(&text)?;

    el.append_child(&el_with_class(doc, "div", "link-glow")?)?;

    if record.highlighted {
        let badge = el_with_class(doc, "div", "highlight-badge")?;
        badge.set_text_content(Some("New!"));
        el.append_child(&badge)?;
    }

    Ok(el)
}

fn create_footer(doc: &Document) -> Result<HtmlElement, JsValue> {
    let footer = el_with_class(doc, "div", "footer")?;
    footer.append_child(&el_with_class(doc, "div", "pulse-dot")?)?;
    let copy = doc.create_element("p")?;
    copy.set_text_content(Some(FOOTER_COPY));
    footer.append_child(&copy)?;
    Ok(footer)
}

fn create_toggle_button(doc: &Document, theme: ThemePreference) -> Result<HtmlElement, JsValue> {
    let button = el_with_class(doc, "button", "theme-toggle")?;
    button.set_attribute("aria-label", "Toggle theme")?;
    button.set_text_content(Some(toggle_glyph(theme)));
    Ok(button)
}

/// Glyph shown on the toggle: the theme a click switches *to*.
const fn toggle_glyph(theme: ThemePreference) -> &'static str {
    match theme {
        ThemePreference::Dark => "☀",
        ThemePreference::Light => "☾",
    }
}

fn attach_activation(el: &HtmlElement, action: &LinkAction<'static>) {
    let action = *action;
    let on_click = Closure::wrap(Box::new(move || {
        activate(&action);
    }) as Box<dyn FnMut()>);
    el.set_onclick(Some(on_click.as_ref().unchecked_ref()));
    // Click handlers live for the page's lifetime.
    on_click.forget();
}

fn attach_toggle(button: &HtmlElement, state: &Rc<RefCell<PageState>>) {
    let state = Rc::clone(state);
    let on_click = Closure::wrap(Box::new(move || {
        let mut s = state.borrow_mut();
        let next = s.theme.toggle();
        s.theme = next;
        // Destructure to satisfy the borrow checker: mutable store + sink.
        let PageState {
            ref mut store,
            ref mut sink,
            ref mut trace,
            ref toggle_button,
            ..
        } = *s;
        commit_theme(next, store, sink);
        Tracer::new(trace).theme(&ThemeEvent { pref: next });
        toggle_button.set_text_content(Some(toggle_glyph(next)));
    }) as Box<dyn FnMut()>);
    button.set_onclick(Some(on_click.as_ref().unchecked_ref()));
    on_click.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidepool_core::link::resolve_labeled;

    #[test]
    fn registry_is_well_formed() {
        assert_eq!(validate_registry(&REGISTRY), Ok(()));
        assert_eq!(ICONS.len(), REGISTRY.len(), "one glyph per link");
    }

    #[test]
    fn reveal_delays_are_non_decreasing() {
        for pair in REGISTRY.windows(2) {
            assert!(
                pair[0].reveal_delay <= pair[1].reveal_delay,
                "staggered reveal reads top-to-bottom"
            );
        }
    }

    #[test]
    fn mail_record_matches_legacy_resolution() {
        let record = REGISTRY.last().expect("registry is non-empty");
        assert_eq!(
            record.action,
            resolve_labeled("Gmail", "gmail : communityaidev@gmail.com"),
        );
    }
}
