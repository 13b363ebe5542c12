#![forbid(unsafe_code)]

use std::rc::Rc;

use homepage_core::{
    KeyInput, LocalTime, Navigator, StartPage, StartPageConfig, StartPageError, Surface, Url,
    WallClock, logging,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlInputElement, KeyboardEvent, Location};

use crate::{
    CLOCK_SELECTOR, LINKS_SELECTOR, SEARCH_FIELD_SELECTOR, TITLE_SELECTOR, start_timer_then_listen,
};

/// Browser local time via `Date`.
struct BrowserClock;

impl WallClock for BrowserClock {
    fn now_local(&self) -> LocalTime {
        let now = js_sys::Date::new_0();
        LocalTime::from_seconds_of_day(
            now.get_hours() * 3600 + now.get_minutes() * 60 + now.get_seconds(),
        )
    }
}

/// Clock element plus document title.
struct DomSurface {
    clock: Element,
    title: Element,
}

impl Surface for DomSurface {
    fn set_clock_text(&mut self, text: &str) {
        self.clock.set_text_content(Some(text));
    }

    fn set_title(&mut self, title: &str) {
        self.title.set_text_content(Some(title));
    }
}

/// Navigates with `location.replace`, so no history entry is pushed.
struct LocationNavigator {
    location: Location,
}

impl Navigator for LocationNavigator {
    type Error = JsValue;

    fn navigate(&mut self, url: &Url) -> Result<(), Self::Error> {
        self.location.replace(url.as_str())
    }
}

/// Handle for a running start page.
///
/// Owns the `keydown` listener and the clock interval; `destroy` (or freeing
/// the handle from JS) cancels both.
#[wasm_bindgen]
pub struct StartPageWeb {
    document: Option<Document>,
    interval_id: Option<i32>,
    on_keydown: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    on_tick: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl StartPageWeb {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            document: None,
            interval_id: None,
            on_keydown: None,
            on_tick: None,
        }
    }

    /// Wire the page inside `document`.
    ///
    /// Fails if a required element is missing or `options` is not a valid
    /// configuration. Calling `init` on a running handle restarts it.
    pub fn init(&mut self, document: Document, options: Option<JsValue>) -> Result<(), JsValue> {
        self.destroy();
        let config = config_from_js(options.as_ref()).map_err(to_js_error)?;
        let page = Rc::new(StartPage::new(&config).map_err(|err| to_js_error(err.into()))?);

        let search_field: HtmlInputElement = require(&document, SEARCH_FIELD_SELECTOR)?
            .dyn_into()
            .map_err(|_| to_js_error(StartPageError::MissingElement(SEARCH_FIELD_SELECTOR)))?;
        let mut surface = DomSurface {
            clock: require(&document, CLOCK_SELECTOR)?,
            title: require(&document, TITLE_SELECTOR)?,
        };
        let window = web_sys::window()
            .ok_or_else(|| to_js_error(StartPageError::Host("no window".to_owned())))?;

        render_links(&document, &page)?;

        let mut navigator = LocationNavigator {
            location: window.location(),
        };
        let keydown_page = Rc::clone(&page);
        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let key = KeyInput::from_dom(
                &event.key(),
                &event.code(),
                event.key_code(),
                event.is_composing(),
            );
            if let Err(_err) = keydown_page.handle_key(&key, &search_field.value(), &mut navigator)
            {
                logging::warn!(error = ?_err, "search redirect failed");
            }
        });

        // First update runs now so the clock is never blank before the first tick.
        page.tick(&BrowserClock, &mut surface);
        let tick_page = Rc::clone(&page);
        let on_tick = Closure::<dyn FnMut()>::new(move || {
            tick_page.tick(&BrowserClock, &mut surface);
        });
        let timeout = i32::try_from(page.tick_millis()).unwrap_or(i32::MAX);

        let interval_id = start_timer_then_listen(
            || {
                window.set_interval_with_callback_and_timeout_and_arguments_0(
                    on_tick.as_ref().unchecked_ref(),
                    timeout,
                )
            },
            || {
                document.add_event_listener_with_callback(
                    "keydown",
                    on_keydown.as_ref().unchecked_ref(),
                )
            },
            |id| window.clear_interval_with_handle(id),
        )?;
        self.document = Some(document);
        self.interval_id = Some(interval_id);
        self.on_keydown = Some(on_keydown);
        self.on_tick = Some(on_tick);

        logging::info!(tick_millis = page.tick_millis(), "start page running");
        Ok(())
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.interval_id.is_some()
    }

    /// Explicit teardown for JS callers. Cancels the clock interval, removes the
    /// key listener, and releases the closures.
    pub fn destroy(&mut self) {
        if let Some(id) = self.interval_id.take()
            && let Some(window) = web_sys::window()
        {
            window.clear_interval_with_handle(id);
        }
        if let (Some(document), Some(on_keydown)) = (self.document.take(), self.on_keydown.take())
            && let Err(_err) = document.remove_event_listener_with_callback(
                "keydown",
                on_keydown.as_ref().unchecked_ref(),
            )
        {
            logging::warn!(error = ?_err, "failed to remove keydown listener");
        }
        if self.on_tick.take().is_some() {
            logging::info!("start page stopped");
        }
    }
}

impl Default for StartPageWeb {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StartPageWeb {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Start the page in the current window's document.
#[wasm_bindgen(js_name = startPage)]
pub fn start_page(options: Option<JsValue>) -> Result<StartPageWeb, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| to_js_error(StartPageError::Host("no document".to_owned())))?;
    let mut handle = StartPageWeb::new();
    handle.init(document, options)?;
    Ok(handle)
}

fn config_from_js(options: Option<&JsValue>) -> Result<StartPageConfig, StartPageError> {
    let Some(options) = options.filter(|v| !v.is_undefined() && !v.is_null()) else {
        return Ok(StartPageConfig::default());
    };
    let json: String = js_sys::JSON::stringify(options)
        .map_err(|err| StartPageError::Host(format!("{err:?}")))?
        .into();
    Ok(StartPageConfig::from_json_str(&json)?)
}

fn require(document: &Document, selector: &'static str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| to_js_error(StartPageError::MissingElement(selector)))
}

fn render_links(document: &Document, page: &StartPage) -> Result<(), JsValue> {
    let Some(container) = document.query_selector(LINKS_SELECTOR)? else {
        return Ok(());
    };
    container.set_text_content(None);
    for link in page.links() {
        let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        anchor.set_href(&link.url);
        anchor.set_text_content(Some(&link.name));
        container.append_child(&anchor)?;
    }
    Ok(())
}

fn to_js_error(err: StartPageError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
