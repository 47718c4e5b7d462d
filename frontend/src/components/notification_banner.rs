use yew::prelude::*;

use crate::{
    config::StyleTokens,
    notification::{Notification, NotificationKind, NotificationPhase},
};

/// Inline style for a banner of `kind` in `phase`.
pub fn banner_style(kind: NotificationKind, phase: NotificationPhase, tokens: &StyleTokens) -> String {
    let background = match kind {
        NotificationKind::Success => tokens.success.as_str(),
        NotificationKind::Error => tokens.error.as_str(),
    };
    let animation = match phase {
        NotificationPhase::Entering => "slideIn 0.3s ease-in-out",
        NotificationPhase::Leaving => "slideOut 0.3s ease-in-out forwards",
    };
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 15px 20px; \
         background-color: {background}; color: white; border-radius: 4px; \
         box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2); z-index: 1000; \
         animation: {animation}; font-weight: 500;"
    )
}

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub notification: Notification,
    pub tokens: StyleTokens,
}

#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let NotificationBannerProps {
        notification,
        tokens,
    } = props;
    let kind = notification.kind.as_str();

    html! {
        <div
            class={classes!("alert", format!("alert-{kind}"))}
            role="alert"
            aria-live="polite"
            style={banner_style(notification.kind, notification.phase, tokens)}
        >
            { notification.message.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::banner_style;
    use crate::{
        config::StyleTokens,
        notification::{NotificationKind, NotificationPhase},
    };

    #[test]
    fn banner_is_colored_by_kind() {
        let tokens = StyleTokens::default();
        let success = banner_style(NotificationKind::Success, NotificationPhase::Entering, &tokens);
        let error = banner_style(NotificationKind::Error, NotificationPhase::Entering, &tokens);
        assert!(success.contains("background-color: #063108;"));
        assert!(error.contains("background-color: #093b07;"));
    }

    #[test]
    fn leaving_banner_slides_out() {
        let tokens = StyleTokens::default();
        let style = banner_style(NotificationKind::Success, NotificationPhase::Leaving, &tokens);
        assert!(style.contains("animation: slideOut 0.3s"));
        assert!(style.contains("position: fixed; top: 20px; right: 20px;"));
    }
}
