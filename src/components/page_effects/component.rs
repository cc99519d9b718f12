//! Leptos component binding the page effects to the document.
//!
//! The component renders only the particle overlay; every other element it
//! touches already exists in the page markup. On mount it measures section
//! layout, registers scroll/click/hover listeners and two
//! IntersectionObservers, and starts a single `requestAnimationFrame`
//! driver that paces everything time-based: scroll classification (at most
//! one per frame), particle respawns, the typewriter, the countdown, the
//! glitch roll, momentum decay, and ripple cleanup.
//!
//! All callbacks are owned by an [`EffectsHandle`]; disposing it cancels
//! the frame loop, disconnects the observers, and removes every listener,
//! so no callback fires after unmount.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
	ScrollLogicalPosition,
};

use super::momentum::Momentum;
use super::particles::ParticlePool;
use super::render;
use super::reveal::{RevealTracker, Typewriter};
use super::scroll::{ScrollClassifier, SectionBounds};
use super::theme::EffectsConfig;
use super::types::PageConfig;

// CSS contracts with the page markup.
const HEADER: &str = ".site-header";
const NAV_LINKS: &str = "a[href^='#']";
const SECTIONS: &str = "section[id]";
const BAND_NAME: &str = ".band-name";
const TAGLINE: &str = ".tagline";
const SHOW_CARDS: &str = ".show-card";
const TRACKS: &str = ".track-list li";
const BUTTONS: &str = ".btn-primary, .btn-secondary, .btn-ticket";
const LOGO: &str = ".logo";
const RELEASE_DATE: &str = ".release-date";
const COUNTDOWN_ID: &str = "countdown";

type EventClosure = Closure<dyn FnMut(web_sys::Event)>;
type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A registered event listener, removable on dispose.
struct ListenerGuard {
	target: EventTarget,
	event: &'static str,
	closure: Rc<EventClosure>,
}

impl ListenerGuard {
	fn attach(
		target: &EventTarget,
		event: &'static str,
		closure: Rc<EventClosure>,
		guards: &mut Vec<ListenerGuard>,
	) {
		let _ = target.add_event_listener_with_callback(event, (*closure).as_ref().unchecked_ref());
		guards.push(Self {
			target: target.clone(),
			event,
			closure,
		});
	}

	fn detach(&self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, (*self.closure).as_ref().unchecked_ref());
	}
}

/// An IntersectionObserver plus the closure backing its callback.
struct ObserverGuard {
	observer: IntersectionObserver,
	_closure: ObserverClosure,
}

/// Glitch trigger bookkeeping.
struct GlitchRuntime {
	next_roll_at: f64,
	active_until: Option<f64>,
}

/// Everything the frame driver and event handlers mutate.
struct EffectsContext {
	config: EffectsConfig,
	rng: StdRng,
	classifier: ScrollClassifier,
	/// Latest scroll offset awaiting classification. Scroll notifications
	/// overwrite it, so coalesced events collapse to the final offset.
	pending_offset: Option<f64>,
	header: Option<HtmlElement>,
	nav_links: Vec<(HtmlElement, String)>,
	band_name: Option<HtmlElement>,
	tagline: Option<HtmlElement>,
	typewriter: Option<Typewriter>,
	momentum: Momentum,
	logo: Option<HtmlElement>,
	pool: Option<ParticlePool>,
	overlay: Option<HtmlElement>,
	particle_nodes: Vec<HtmlElement>,
	countdown: Option<Element>,
	release_epoch_ms: f64,
	next_countdown_at: f64,
	glitch: GlitchRuntime,
	ripples: Vec<(HtmlElement, f64)>,
}

impl EffectsContext {
	/// One driver tick: consume the pending scroll offset, advance every
	/// time-based effect, and write the results to the DOM.
	fn frame(&mut self, now: f64) {
		if let Some(offset) = self.pending_offset.take() {
			let frame = self.classifier.classify(offset);
			if let Some(header) = self.header.as_ref() {
				render::apply_header(header, &frame);
			}
			render::apply_active_links(&self.nav_links, frame.active_section.as_deref());
			if let Some(el) = self.band_name.as_ref() {
				render::apply_parallax(el, offset, self.config.scroll.band_name_parallax);
			}
			if let Some(el) = self.tagline.as_ref() {
				render::apply_parallax(el, offset, self.config.scroll.tagline_parallax);
			}
		}

		if let Some(rotation) = self.momentum.tick() {
			if let Some(logo) = self.logo.as_ref() {
				render::apply_rotation(logo, rotation);
			}
		}

		if let Some(tw) = self.typewriter.as_mut() {
			if let Some(prefix) = tw.poll(now) {
				if let Some(tagline) = self.tagline.as_ref() {
					tagline.set_text_content(Some(&prefix));
				}
			}
		}

		if let (Some(pool), Some(overlay)) = (self.pool.as_mut(), self.overlay.as_ref()) {
			for idx in pool.tick(now, &mut self.rng) {
				if let Some(node) = self.particle_nodes.get(idx) {
					node.remove();
				}
				if let Some(node) = render::spawn_particle(overlay, &pool.particles()[idx]) {
					if let Some(slot) = self.particle_nodes.get_mut(idx) {
						*slot = node;
					}
				}
			}
		}

		if now >= self.glitch.next_roll_at {
			self.glitch.next_roll_at = now + self.config.glitch.interval_ms;
			if self.glitch.active_until.is_none()
				&& self.rng.gen_bool(self.config.glitch.probability)
			{
				if let Some(el) = self.band_name.as_ref() {
					render::apply_glitch(el, true);
				}
				self.glitch.active_until = Some(now + self.config.glitch.duration_ms);
			}
		}
		if let Some(until) = self.glitch.active_until {
			if now >= until {
				if let Some(el) = self.band_name.as_ref() {
					render::apply_glitch(el, false);
				}
				self.glitch.active_until = None;
			}
		}

		if let Some(el) = self.countdown.as_ref() {
			if now >= self.next_countdown_at {
				self.next_countdown_at = now + 1_000.0;
				render::render_countdown(el, self.release_epoch_ms - now);
			}
		}

		self.ripples.retain(|(node, expires_at)| {
			if now >= *expires_at {
				node.remove();
				false
			} else {
				true
			}
		});
	}
}

/// Owns every callback registered by [`PageEffects`].
///
/// Dispose cancels the pending animation frame, disconnects the observers,
/// removes all listeners, stops the particle pool, and clears the nodes the
/// effects created. After it returns no effect callback fires again.
/// Dropping the handle disposes it.
pub struct EffectsHandle {
	stopped: Rc<Cell<bool>>,
	raf_id: Rc<Cell<i32>>,
	frame_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	listeners: Vec<ListenerGuard>,
	observers: Vec<ObserverGuard>,
	injected_css: Option<Element>,
	context: Rc<RefCell<EffectsContext>>,
}

impl EffectsHandle {
	/// Tear down every loop and listener. Idempotent.
	pub fn dispose(&mut self) {
		if self.stopped.replace(true) {
			return;
		}
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(self.raf_id.get());
		}
		// Safe to drop now that the pending frame is canceled.
		*self.frame_closure.borrow_mut() = None;
		for guard in self.observers.drain(..) {
			guard.observer.disconnect();
		}
		for guard in self.listeners.drain(..) {
			guard.detach();
		}
		{
			let mut ctx = self.context.borrow_mut();
			if let Some(pool) = ctx.pool.as_mut() {
				pool.stop();
			}
			for node in ctx.particle_nodes.drain(..) {
				node.remove();
			}
			for (node, _) in ctx.ripples.drain(..) {
				node.remove();
			}
		}
		if let Some(style) = self.injected_css.take() {
			style.remove();
		}
		// The overlay node itself belongs to the view and is removed on
		// unmount.
	}
}

impl Drop for EffectsHandle {
	fn drop(&mut self) {
		self.dispose();
	}
}

fn select_one(document: &Document, selector: &str) -> Option<HtmlElement> {
	document
		.query_selector(selector)
		.ok()
		.flatten()
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn select_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
	let mut out = Vec::new();
	let Ok(list) = document.query_selector_all(selector) else {
		return out;
	};
	for i in 0..list.length() {
		if let Some(el) = list
			.item(i)
			.and_then(|node| node.dyn_into::<HtmlElement>().ok())
		{
			out.push(el);
		}
	}
	out
}

/// Wire every effect to the document. Returns None only when no window or
/// document exists; individually missing page elements just skip their
/// feature.
fn mount_effects(
	config: EffectsConfig,
	page: PageConfig,
	overlay: HtmlElement,
) -> Option<EffectsHandle> {
	let window = web_sys::window()?;
	let document = window.document()?;
	let now = js_sys::Date::now();

	let seed = page.seed.unwrap_or(now as u64);
	let mut rng = StdRng::seed_from_u64(seed);

	// Section layout, measured once. The bounds stay accurate as long as
	// the page does not reflow.
	let mut sections = Vec::new();
	for el in select_all(&document, SECTIONS) {
		let id = el.id();
		if id.is_empty() {
			continue;
		}
		sections.push(SectionBounds::new(
			id,
			el.offset_top() as f64,
			el.offset_height() as f64,
		));
	}

	let header = select_one(&document, HEADER);
	if header.is_none() {
		info!("page effects: no {HEADER} element, header states skipped");
	}
	let band_name = select_one(&document, BAND_NAME);
	let tagline = select_one(&document, TAGLINE);
	let logo = select_one(&document, LOGO);

	let mut nav_links = Vec::new();
	for el in select_all(&document, NAV_LINKS) {
		if let Some(id) = el
			.get_attribute("href")
			.as_deref()
			.and_then(|href| href.strip_prefix('#'))
		{
			if !id.is_empty() {
				nav_links.push((el, id.to_string()));
			}
		}
	}

	let typewriter = tagline.as_ref().map(|el| {
		let text = el.text_content().unwrap_or_default();
		Typewriter::new(&text, config.typewriter.char_delay_ms)
	});

	// Fill the particle field inside the overlay the component rendered.
	let pool = ParticlePool::new(config.particles.clone(), now, &mut rng);
	let mut particle_nodes = Vec::with_capacity(pool.len());
	for particle in pool.particles() {
		if let Some(node) = render::spawn_particle(&overlay, particle) {
			particle_nodes.push(node);
		}
	}

	// Countdown container under the release date, created once.
	let countdown = select_one(&document, RELEASE_DATE).and_then(|release| {
		if let Some(existing) = document.get_element_by_id(COUNTDOWN_ID) {
			return Some(existing);
		}
		let el = document.create_element("div").ok()?;
		el.set_class_name("countdown-timer");
		el.set_id(COUNTDOWN_ID);
		release.append_child(&el).ok()?;
		Some(el)
	});

	let injected_css = render::inject_effect_css(&document, &config);

	// Show cards start hidden; the observer below reveals each once.
	let cards = select_all(&document, SHOW_CARDS);
	for card in &cards {
		render::prepare_reveal(card, &config.reveal);
	}

	let section_count = sections.len();
	let nav_count = nav_links.len();
	let card_count = cards.len();
	let particle_count = pool.len();

	let context = Rc::new(RefCell::new(EffectsContext {
		classifier: ScrollClassifier::new(sections, config.scroll.clone()),
		momentum: Momentum::new(config.momentum.clone()),
		pending_offset: Some(window.page_y_offset().unwrap_or(0.0)),
		header,
		nav_links,
		band_name,
		tagline,
		typewriter,
		logo,
		pool: Some(pool),
		overlay: Some(overlay),
		particle_nodes,
		countdown,
		release_epoch_ms: page.release_epoch_ms,
		next_countdown_at: now,
		glitch: GlitchRuntime {
			next_roll_at: now + config.glitch.interval_ms,
			active_until: None,
		},
		ripples: Vec::new(),
		rng,
		config,
	}));

	let mut listeners = Vec::new();

	// Scroll: record the latest offset; the frame driver consumes it, so
	// at most one classification runs per frame.
	{
		let ctx = context.clone();
		let win = window.clone();
		let closure: Rc<EventClosure> = Rc::new(Closure::new(move |_ev: web_sys::Event| {
			let offset = win.page_y_offset().unwrap_or(0.0);
			ctx.borrow_mut().pending_offset = Some(offset);
		}));
		ListenerGuard::attach(window.as_ref(), "scroll", closure, &mut listeners);
	}

	// Smooth scrolling for in-page nav links.
	if !context.borrow().nav_links.is_empty() {
		let doc = document.clone();
		let closure: Rc<EventClosure> = Rc::new(Closure::new(move |ev: web_sys::Event| {
			ev.prevent_default();
			let Some(link) = ev
				.current_target()
				.and_then(|t| t.dyn_into::<Element>().ok())
			else {
				return;
			};
			let Some(href) = link.get_attribute("href") else {
				return;
			};
			if let Ok(Some(target)) = doc.query_selector(&href) {
				let options = ScrollIntoViewOptions::new();
				options.set_behavior(ScrollBehavior::Smooth);
				options.set_block(ScrollLogicalPosition::Start);
				target.scroll_into_view_with_scroll_into_view_options(&options);
			}
		}));
		for (link, _) in context.borrow().nav_links.iter() {
			ListenerGuard::attach(link.as_ref(), "click", closure.clone(), &mut listeners);
		}
	}

	// Track-list hover borders.
	let tracks = select_all(&document, TRACKS);
	if !tracks.is_empty() {
		let ctx = context.clone();
		let enter: Rc<EventClosure> = Rc::new(Closure::new(move |ev: web_sys::Event| {
			if let Some(el) = ev
				.current_target()
				.and_then(|t| t.dyn_into::<HtmlElement>().ok())
			{
				render::apply_track_border(&el, ctx.borrow().config.tracks.hover_border);
			}
		}));
		let ctx = context.clone();
		let leave: Rc<EventClosure> = Rc::new(Closure::new(move |ev: web_sys::Event| {
			if let Some(el) = ev
				.current_target()
				.and_then(|t| t.dyn_into::<HtmlElement>().ok())
			{
				render::apply_track_border(&el, ctx.borrow().config.tracks.rest_border);
			}
		}));
		for track in &tracks {
			ListenerGuard::attach(track.as_ref(), "mouseenter", enter.clone(), &mut listeners);
			ListenerGuard::attach(track.as_ref(), "mouseleave", leave.clone(), &mut listeners);
		}
	}

	// Button ripples.
	let buttons = select_all(&document, BUTTONS);
	if !buttons.is_empty() {
		for button in &buttons {
			render::prepare_button(button);
		}
		let ctx = context.clone();
		let closure: Rc<EventClosure> = Rc::new(Closure::new(move |ev: web_sys::Event| {
			let ev: MouseEvent = ev.unchecked_into();
			let Some(button) = ev
				.current_target()
				.and_then(|t| t.dyn_into::<HtmlElement>().ok())
			else {
				return;
			};
			let now = js_sys::Date::now();
			let mut ctx = ctx.borrow_mut();
			if let Some(ripple) = render::spawn_ripple(&button, &ev) {
				let expires_at = now + ctx.config.ripple.duration_ms;
				ctx.ripples.push((ripple, expires_at));
			}
		}));
		for button in &buttons {
			ListenerGuard::attach(button.as_ref(), "click", closure.clone(), &mut listeners);
		}
	}

	// Logo momentum hover.
	if let Some(logo) = context.borrow().logo.clone() {
		let ctx = context.clone();
		let enter: Rc<EventClosure> = Rc::new(Closure::new(move |_ev: web_sys::Event| {
			ctx.borrow_mut().momentum.hover_start();
		}));
		let ctx = context.clone();
		let leave: Rc<EventClosure> = Rc::new(Closure::new(move |_ev: web_sys::Event| {
			ctx.borrow_mut().momentum.hover_end();
		}));
		ListenerGuard::attach(logo.as_ref(), "mouseenter", enter, &mut listeners);
		ListenerGuard::attach(logo.as_ref(), "mouseleave", leave, &mut listeners);
	}

	let mut observers = Vec::new();

	// Show-card reveals, staggered within each notification batch.
	if !cards.is_empty() {
		let mut tracker = RevealTracker::new(cards.len());
		let stagger = context.borrow().config.reveal.stagger_ms;
		let cards_cb = cards.clone();
		let callback: ObserverClosure =
			Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
				let mut visible = Vec::new();
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if !entry.is_intersecting() {
						continue;
					}
					let target = entry.target();
					if let Some(idx) = cards_cb
						.iter()
						.position(|card| target.is_same_node(Some(card.as_ref())))
					{
						visible.push(idx);
					}
				}
				for reveal in tracker.observe_batch(&visible, stagger) {
					let card = &cards_cb[reveal.index];
					render::apply_reveal(card, reveal.delay_ms);
					observer.unobserve(card);
				}
			});
		let init = IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from_f64(context.borrow().config.reveal.threshold));
		init.set_root_margin(&format!(
			"0px 0px -{}px 0px",
			context.borrow().config.reveal.bottom_margin
		));
		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
			Ok(observer) => {
				for card in &cards {
					observer.observe(card);
				}
				observers.push(ObserverGuard {
					observer,
					_closure: callback,
				});
			}
			Err(e) => warn!("page effects: reveal observer unavailable: {e:?}"),
		}
	}

	// Tagline typewriter, armed on first half-visible intersection.
	if let Some(tagline_el) = context.borrow().tagline.clone() {
		let ctx = context.clone();
		let callback: ObserverClosure =
			Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
				let intersecting = entries.iter().any(|entry| {
					entry
						.dyn_into::<IntersectionObserverEntry>()
						.map(|e| e.is_intersecting())
						.unwrap_or(false)
				});
				if !intersecting {
					return;
				}
				let now = js_sys::Date::now();
				let mut guard = ctx.borrow_mut();
				let state = &mut *guard;
				if let Some(tw) = state.typewriter.as_mut() {
					if tw.start(now) {
						if let Some(tagline) = state.tagline.as_ref() {
							tagline.set_text_content(Some(""));
						}
					}
				}
			});
		let init = IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from_f64(
			context.borrow().config.typewriter.threshold,
		));
		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
			Ok(observer) => {
				observer.observe(&tagline_el);
				observers.push(ObserverGuard {
					observer,
					_closure: callback,
				});
			}
			Err(e) => warn!("page effects: typewriter observer unavailable: {e:?}"),
		}
	}

	// Single frame driver. Reschedules itself until the handle stops it.
	let stopped = Rc::new(Cell::new(false));
	let raf_id = Rc::new(Cell::new(0));
	let frame_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	{
		let ctx = context.clone();
		let stopped_frame = stopped.clone();
		let raf_frame = raf_id.clone();
		let inner = frame_closure.clone();
		*frame_closure.borrow_mut() = Some(Closure::new(move || {
			if stopped_frame.get() {
				return;
			}
			let now = js_sys::Date::now();
			ctx.borrow_mut().frame(now);
			if stopped_frame.get() {
				return;
			}
			if let Some(window) = web_sys::window() {
				if let Some(cb) = inner.borrow().as_ref() {
					if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
						raf_frame.set(id);
					}
				}
			}
		}));
	}
	if let Some(cb) = frame_closure.borrow().as_ref() {
		if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			raf_id.set(id);
		}
	}

	info!(
		"page effects ready: {section_count} sections, {nav_count} nav links, {card_count} cards, {particle_count} particles (seed {seed})"
	);

	Some(EffectsHandle {
		stopped,
		raf_id,
		frame_closure,
		listeners,
		observers,
		injected_css,
		context,
	})
}

/// Attaches the interactive layer to the current page.
///
/// Renders the fixed particle overlay and, once mounted, wires all other
/// effects onto the existing markup. Elements missing from the page simply
/// disable their feature. Unmounting the component disposes everything.
#[component]
pub fn PageEffects(
	#[prop(optional)] config: PageConfig,
	#[prop(default = EffectsConfig::default())] effects: EffectsConfig,
) -> impl IntoView {
	let overlay_ref = NodeRef::<leptos::html::Div>::new();
	let handle: Rc<RefCell<Option<EffectsHandle>>> = Rc::new(RefCell::new(None));

	let handle_mount = handle.clone();
	Effect::new(move |_| {
		let Some(overlay) = overlay_ref.get() else {
			return;
		};
		if handle_mount.borrow().is_some() {
			return;
		}
		let overlay: HtmlElement = overlay.into();
		match mount_effects(effects.clone(), config.clone(), overlay) {
			Some(h) => *handle_mount.borrow_mut() = Some(h),
			None => warn!("page effects: window unavailable, nothing mounted"),
		}
	});

	// `on_cleanup` requires `Send + Sync` because leptos compiles the same API
	// for multi-threaded SSR; in single-threaded CSR/wasm `SendWrapper` is a
	// transparent no-op that satisfies the bound without changing behavior.
	let handle_cleanup = leptos::__reexports::send_wrapper::SendWrapper::new(handle.clone());
	on_cleanup(move || {
		if let Some(mut h) = handle_cleanup.borrow_mut().take() {
			h.dispose();
		}
	});

	view! {
		<div
			node_ref=overlay_ref
			class="particle-field"
			style="position: fixed; inset: 0; overflow: hidden; pointer-events: none; z-index: -1;"
		/>
	}
}
