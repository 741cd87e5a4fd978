use dioxus::prelude::*;

/// Colour mode of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value of the `data-theme` attribute and the persisted cookie.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored key, falling back to light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Shared theme state provided as context by [`ThemeSeed`].
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

/// Seed the theme on application startup.
///
/// Reads the persisted mode from a cookie, applies it to the document root
/// and provides [`ThemeState`] to descendants. Mount once near the root.
#[component]
pub fn ThemeSeed(children: Element) -> Element {
    let mut state = use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::default()),
    });

    use_effect(move || {
        spawn(async move {
            let stored = document::eval(
                r#"
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'light';
                document.documentElement.setAttribute('data-theme', theme);
                return theme;
                "#,
            )
            .join::<String>()
            .await;
            match stored {
                Ok(key) => state.mode.set(ThemeMode::from_key(&key)),
                Err(err) => tracing::debug!(error = %err, "theme cookie unavailable"),
            }
        });
    });

    rsx! { {children} }
}

/// Persist the mode to a cookie and apply it to the document.
pub fn set_theme(mode: ThemeMode) {
    let theme = mode.as_str();
    let _ = document::eval(&format!(
        r#"
        document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
        document.documentElement.setAttribute('data-theme', '{theme}');
        "#,
    ));
}

/// Header button flipping between light and dark.
#[component]
pub fn ThemeToggle() -> Element {
    let Some(mut state) = try_use_context::<ThemeState>() else {
        return rsx! {};
    };
    let mode = (state.mode)();

    rsx! {
        button {
            class: "dos-theme-toggle",
            r#type: "button",
            "aria-label": "Toggle theme",
            "data-mode": mode.as_str(),
            onclick: move |_| {
                let next = (state.mode)().toggled();
                state.mode.set(next);
                set_theme(next);
            },
            if mode == ThemeMode::Dark { "\u{263E}" } else { "\u{2600}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn theme_mode_key_roundtrip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_key(mode.as_str()), mode);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_light() {
        assert_eq!(ThemeMode::from_key("cyberpunk"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_key(""), ThemeMode::Light);
    }

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    fn without_seed() -> Element {
        rsx! {
            ThemeToggle {}
        }
    }

    #[test]
    fn toggle_without_seed_renders_nothing() {
        let mut dom = VirtualDom::new(without_seed);
        dom.rebuild_in_place();
        assert!(!dioxus_ssr::render(&dom).contains("dos-theme-toggle"));
    }
}
