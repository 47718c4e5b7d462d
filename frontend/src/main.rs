//! Client-side enhancements for a static portfolio page: dark mode, smooth
//! navigation, scroll reveals, contact form validation and alert banners.

mod components;
mod config;
mod contact;
mod dom;
mod effects;
mod error;
mod i18n;
mod navigation;
mod notification;
mod page;
mod reveal;
mod theme;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::{
    components::notification_banner::NotificationBanner,
    config::{PageConfig, NOTIFICATION_HOST_ID},
    notification::{NotificationAction, NotificationState, Notifier},
    page::PageController,
};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<PageConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let notifications = use_reducer(NotificationState::default);

    // 绑定页面：只执行一次，卸载时释放所有监听器
    {
        let config = props.config.clone();
        let notifier = Notifier::from_reducer(&notifications);
        use_effect_with((), move |_| {
            let controller = match PageController::mount(&config, notifier) {
                Ok(controller) => Some(controller),
                Err(err) => {
                    log::error!("page enhancements disabled: {err}");
                    None
                },
            };
            move || drop(controller)
        });
    }

    // 通知自动消失：新通知到来时旧的定时器随 cleanup 一起取消
    {
        let dispatcher = notifications.dispatcher();
        let visible_ms = props.config.timings.notification_visible_ms;
        let exit_ms = props.config.timings.notification_exit_ms;
        let current_id = notifications.current.as_ref().map(|n| n.id);
        use_effect_with(current_id, move |current_id| {
            let timers = current_id.map(|id| {
                let begin_exit = {
                    let dispatcher = dispatcher.clone();
                    Timeout::new(visible_ms, move || {
                        dispatcher.dispatch(NotificationAction::BeginExit(id))
                    })
                };
                let remove = Timeout::new(visible_ms.saturating_add(exit_ms), move || {
                    dispatcher.dispatch(NotificationAction::Remove(id))
                });
                (begin_exit, remove)
            });
            move || drop(timers)
        });
    }

    match notifications.current.as_ref() {
        Some(notification) => html! {
            <NotificationBanner
                key={notification.id.to_string()}
                notification={notification.clone()}
                tokens={props.config.style.clone()}
            />
        },
        None => html! {},
    }
}

/// `#portfolio-notifications`, created under `<body>` when the page has none.
fn notification_host() -> Option<Element> {
    let document = web_sys::window()?.document()?;
    if let Some(host) = document.get_element_by_id(NOTIFICATION_HOST_ID) {
        return Some(host);
    }
    let host = document.create_element("div").ok()?;
    host.set_id(NOTIFICATION_HOST_ID);
    document.body()?.append_child(&host).ok()?;
    Some(host)
}

fn main() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger init failed: {err}").into());
    }

    let config = PageConfig::load_or_default();
    theme::apply_saved_theme(&config.selectors);

    let Some(host) = notification_host() else {
        log::error!("cannot create notification host, page enhancements disabled");
        return;
    };
    yew::Renderer::<App>::with_root_and_props(
        host,
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
