use gloo_events::EventListener;
use gloo_net::http::Request;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::content::{
    copyright_line, image_trails_copy, step_number, Card, Section, EXTENSION_ARCHIVE_HREF,
    FEATURES, FOOTER_SIGNOFF, FOOTER_TAGLINE, HERO_IMAGE_ID, IMAGES_ENDPOINT, INSTALLATION_STEPS,
    PRODUCT_NAME, SECTIONS, SHOWCASE_IMAGE_IDS, TUTORIAL_STEPS,
};
use crate::lightbox::{Lightbox, OverlayTarget};
use crate::manifest::{GalleryItem, ImageManifest};
use crate::menu::MenuState;
use crate::scroll::{compute_scroll_state, ScrollState};

/// Listens on the window until the returned listener is dropped.
fn window_listener(event: &'static str, handler: impl FnMut(&Event) + 'static) -> Option<EventListener> {
    let window = window()?;
    Some(EventListener::new(&window, event, handler))
}

fn sample_scroll_state() -> ScrollState<'static> {
    let Some(win) = window() else {
        return ScrollState::default();
    };

    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let Some(document) = win.document() else {
        return compute_scroll_state(&[], scroll_y);
    };

    let section_tops = SECTIONS
        .iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.id)?;
            Some((section.id, element.get_bounding_client_rect().top()))
        })
        .collect::<Vec<_>>();

    compute_scroll_state(&section_tops, scroll_y)
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

async fn fetch_manifest() -> Option<ImageManifest> {
    let response = Request::get(IMAGES_ENDPOINT).send().await.ok()?;

    if !response.ok() {
        return None;
    }

    response.json::<ImageManifest>().await.ok()
}

enum LightboxAction {
    Select(GalleryItem),
    Click(OverlayTarget),
    Key(String),
    Clear,
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LightboxAction::Select(item) => next.select(item),
            LightboxAction::Click(target) => next.click(target),
            LightboxAction::Key(key) => next.key(&key),
            LightboxAction::Clear => next.clear(),
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn manifest_image(manifest: &ImageManifest, id: &str, class: &'static str) -> Html {
    manifest
        .lookup(id)
        .map(|item| {
            html! {
                <img
                    class={class}
                    src={item.image_url.clone()}
                    alt={item.description.clone()}
                    data-hint={item.image_hint.clone()}
                    loading="lazy"
                />
            }
        })
        .unwrap_or_default()
}

fn download_button(class: &'static str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <a class={classes!("button", class)} href={EXTENSION_ARCHIVE_HREF} download="" onclick={onclick}>
            {"Get Extension"}
        </a>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let scroll_state = use_state_eq(ScrollState::default);
    let menu = use_state_eq(MenuState::default);

    {
        let scroll_state = scroll_state.clone();
        use_effect_with((), move |_| {
            scroll_state.set(sample_scroll_state());
            let listener = window_listener("scroll", move |_| {
                scroll_state.set(sample_scroll_state());
            });
            move || drop(listener)
        });
    }

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set((*menu).toggled()))
    };

    let on_link_activated = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set((*menu).after_link_activated()))
    };

    let nav_links = |class: &'static str| -> Html {
        SECTIONS
            .iter()
            .map(|section: &Section| {
                let is_active = scroll_state.active_section == Some(section.id);
                html! {
                    <a
                        key={section.id}
                        class={classes!(class, is_active.then_some("is-active"))}
                        href={section.href()}
                        aria-current={is_active.then_some("true")}
                        onclick={on_link_activated.clone()}
                    >
                        {section.label}
                    </a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <header class={classes!("site-header", scroll_state.past_threshold.then_some("is-scrolled"))}>
            <div class="container header-bar">
                <a class="brand" href="#overview" onclick={on_link_activated.clone()}>
                    <span class="brand-mark" aria-hidden="true">{"📘"}</span>
                    <span>{format!("{PRODUCT_NAME} Hub")}</span>
                </a>

                <nav class="desktop-nav" aria-label="Primary">
                    {nav_links("nav-link")}
                </nav>

                <div class="header-actions">
                    {download_button("desktop-only", Callback::noop())}
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label={(*menu).toggle_label()}
                        aria-expanded={(*menu).is_open().to_string()}
                        aria-controls="mobile-menu"
                        onclick={on_toggle_menu}
                    >
                        <span aria-hidden="true">{(*menu).icon()}</span>
                    </button>
                </div>
            </div>

            if menu.is_open() {
                <div id="mobile-menu" class="mobile-menu">
                    <nav class="mobile-nav" aria-label="Mobile">
                        {nav_links("mobile-nav-link")}
                    </nav>
                    {download_button("mobile-download", on_link_activated.clone())}
                </div>
            }
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct ManifestProps {
    manifest: Rc<ImageManifest>,
}

#[function_component(Hero)]
fn hero(props: &ManifestProps) -> Html {
    html! {
        <section id="overview" class="section hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <h1>
                        {"A more "}<span class="accent">{"inclusive"}</span>{" way to read online."}
                    </h1>
                    <p class="lead">
                        {"InclusiveRead enhances your browsing experience with powerful accessibility tools. Customize fonts, listen to text, adjust colors, and enjoy clutter-free reading. Make the web work for you."}
                    </p>
                    <div class="hero-actions">
                        {download_button("primary", Callback::noop())}
                        <a class="button outline" href="#features">{"Learn More"}</a>
                    </div>
                </div>
                <div class="hero-media">
                    {manifest_image(&props.manifest, HERO_IMAGE_ID, "hero-image")}
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features(props: &ManifestProps) -> Html {
    html! {
        <section id="features" class="section muted-band">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Powerful Features for Everyone"}</h2>
                    <p>{"Tailor your reading experience with a suite of tools designed for comfort and accessibility."}</p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature: &Card| html! {
                        <article key={feature.title} class="card feature-card">
                            <div class="icon-badge" aria-hidden="true">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p class="muted">{feature.description}</p>
                            {manifest_image(&props.manifest, feature.image_id, "card-image")}
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Tutorial)]
fn tutorial(props: &ManifestProps) -> Html {
    let video = props.manifest.tutorial_video.clone();

    html! {
        <section id="tutorial" class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>{format!("How to Use {PRODUCT_NAME}")}</h2>
                    <p>{"Unleash the full potential of your reading experience in a few simple steps."}</p>
                </div>
                <ol class="tutorial-grid">
                    { for TUTORIAL_STEPS.iter().map(|step: &Card| html! {
                        <li key={step.title} class="tutorial-step">
                            <div class="icon-badge" aria-hidden="true">{step.icon}</div>
                            <h3>{step.title}</h3>
                            <p class="muted">{step.description}</p>
                            {manifest_image(&props.manifest, step.image_id, "step-image")}
                        </li>
                    }) }
                </ol>
                { for video.map(|src| html! {
                    <div class="video-frame">
                        <iframe
                            src={src}
                            title={format!("{PRODUCT_NAME} tutorial video")}
                            allow="accelerometer; encrypted-media; gyroscope; picture-in-picture; fullscreen"
                            loading="lazy"
                        />
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Installation)]
fn installation(props: &ManifestProps) -> Html {
    html! {
        <section id="installation" class="section muted-band">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Easy Installation for Chrome"}</h2>
                    <p>{format!("Get started with {PRODUCT_NAME} in just a few simple steps.")}</p>
                </div>
                <ol class="install-list">
                    { for INSTALLATION_STEPS.iter().enumerate().map(|(index, step)| html! {
                        <li key={index} class="install-row">
                            <div class={classes!("install-media", image_trails_copy(index).then_some("is-trailing"))}>
                                {manifest_image(&props.manifest, step.image_id, "install-image")}
                            </div>
                            <div class="install-copy">
                                <span class="step-number" aria-hidden="true">{step_number(index)}</span>
                                <div>
                                    <h3>
                                        <span class="step-icon" aria-hidden="true">{step.icon}</span>
                                        {step.title}
                                    </h3>
                                    <p class="muted">{step.description}</p>
                                </div>
                            </div>
                        </li>
                    }) }
                </ol>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ShowcaseProps {
    manifest: Rc<ImageManifest>,
    on_select: Callback<GalleryItem>,
}

#[function_component(Showcase)]
fn showcase(props: &ShowcaseProps) -> Html {
    html! {
        <section id="showcase" class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>{format!("See {PRODUCT_NAME} in Action")}</h2>
                    <p>{"Take a closer look at how our extension transforms your browsing experience."}</p>
                </div>
                <div class="showcase-grid">
                    { for props.manifest.resolve_all(&SHOWCASE_IMAGE_IDS).map(|item| {
                        let onclick = {
                            let item = item.clone();
                            let on_select = props.on_select.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(item.clone()))
                        };

                        html! {
                            <button key={item.id.clone()} class="showcase-tile" type="button" onclick={onclick}>
                                <img src={item.image_url.clone()} alt={item.description.clone()} loading="lazy" />
                                <span class="showcase-caption">{item.description.clone()}</span>
                            </button>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct LightboxOverlayProps {
    item: GalleryItem,
    on_click: Callback<OverlayTarget>,
}

#[function_component(LightboxOverlay)]
fn lightbox_overlay(props: &LightboxOverlayProps) -> Html {
    let on_backdrop = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(OverlayTarget::Backdrop))
    };

    let on_close = {
        let on_click = props.on_click.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_click.emit(OverlayTarget::CloseButton);
        })
    };

    let on_content = {
        let on_click = props.on_click.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_click.emit(OverlayTarget::Content);
        })
    };

    html! {
        <div
            class="lightbox"
            role="dialog"
            aria-modal="true"
            aria-label={props.item.description.clone()}
            onclick={on_backdrop}
        >
            <button class="lightbox-close" type="button" aria-label="Close modal" onclick={on_close}>
                <span aria-hidden="true">{"✕"}</span>
            </button>
            <figure class="lightbox-content" onclick={on_content}>
                <img
                    src={props.item.image_url.clone()}
                    alt={props.item.description.clone()}
                    data-hint={props.item.image_hint.clone()}
                />
                <figcaption>{props.item.description.clone()}</figcaption>
            </figure>
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = use_memo((), |_| current_year());

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <a class="brand" href="#overview">
                        <span class="brand-mark" aria-hidden="true">{"📘"}</span>
                        <span>{PRODUCT_NAME}</span>
                    </a>
                    <p class="muted">{FOOTER_TAGLINE}</p>
                </div>

                <nav class="footer-column" aria-label="Footer">
                    <h4>{"Navigation"}</h4>
                    <ul>
                        { for SECTIONS.iter().map(|section| html! {
                            <li key={section.id}>
                                <a href={section.href()}>{section.label}</a>
                            </li>
                        }) }
                    </ul>
                </nav>

                <div class="footer-column">
                    <h4>{"Legal"}</h4>
                    <ul>
                        <li><a href="#">{"Privacy"}</a></li>
                        <li><a href="#">{"Terms"}</a></li>
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Download"}</h4>
                    {download_button("pill", Callback::noop())}
                </div>
            </div>

            <div class="container footer-bottom">
                <p>{copyright_line(*year)}</p>
                <p class="signoff">{FOOTER_SIGNOFF}</p>
            </div>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    let manifest = use_state(|| Rc::new(ImageManifest::default()));
    let lightbox = use_reducer_eq(Lightbox::default);

    {
        let manifest = manifest.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Some(loaded) = fetch_manifest().await {
                    manifest.set(Rc::new(loaded));
                }
            });
            || ()
        });
    }

    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with((), move |_| {
            let keydown = {
                let dispatcher = dispatcher.clone();
                window_listener("keydown", move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        dispatcher.dispatch(LightboxAction::Key(event.key()));
                    }
                })
            };
            let hashchange = window_listener("hashchange", move |_| {
                dispatcher.dispatch(LightboxAction::Clear);
            });
            move || drop((keydown, hashchange))
        });
    }

    let on_select = {
        let dispatcher = lightbox.dispatcher();
        Callback::from(move |item: GalleryItem| dispatcher.dispatch(LightboxAction::Select(item)))
    };

    let on_overlay_click = {
        let dispatcher = lightbox.dispatcher();
        Callback::from(move |target: OverlayTarget| dispatcher.dispatch(LightboxAction::Click(target)))
    };

    html! {
        <>
            <a class="skip-link" href="#overview">{"Skip to main content"}</a>
            <div class="page-shell">
                <Header />
                <main>
                    <Hero manifest={(*manifest).clone()} />
                    <Features manifest={(*manifest).clone()} />
                    <Tutorial manifest={(*manifest).clone()} />
                    <Installation manifest={(*manifest).clone()} />
                    <Showcase manifest={(*manifest).clone()} on_select={on_select} />
                    { for lightbox.selected().cloned().map(|item| html! {
                        <LightboxOverlay item={item} on_click={on_overlay_click.clone()} />
                    }) }
                </main>
                <Footer />
            </div>
        </>
    }
}

pub fn run() {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}
