/// The six visual treatments of the page. Content and behaviour are shared; only palette and
/// typography differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Classic,
    Warm,
    Editorial,
    Minimal,
    Bold,
    Serene,
}

pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub primary: &'static str,
    pub primary_foreground: &'static str,
    pub secondary: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub heading_font: &'static str,
    pub body_font: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Classic,
        Theme::Warm,
        Theme::Editorial,
        Theme::Minimal,
        Theme::Bold,
        Theme::Serene,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Warm => "warm",
            Theme::Editorial => "editorial",
            Theme::Minimal => "minimal",
            Theme::Bold => "bold",
            Theme::Serene => "serene",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.slug() == slug)
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Classic => Palette {
                background: "#fbfaf7",
                foreground: "#1f2933",
                primary: "#1e4d6b",
                primary_foreground: "#ffffff",
                secondary: "#e6eef3",
                muted: "#5f6b76",
                border: "#dde3e8",
                heading_font: "'Playfair Display', Georgia, serif",
                body_font: "'Inter', system-ui, sans-serif",
            },
            Theme::Warm => Palette {
                background: "#fdf8f3",
                foreground: "#2d2420",
                primary: "#b4532a",
                primary_foreground: "#fffaf5",
                secondary: "#f5e6d8",
                muted: "#7a6558",
                border: "#ecdccd",
                heading_font: "'Fraunces', Georgia, serif",
                body_font: "'Source Sans 3', system-ui, sans-serif",
            },
            Theme::Editorial => Palette {
                background: "#ffffff",
                foreground: "#111111",
                primary: "#111111",
                primary_foreground: "#ffffff",
                secondary: "#f2f2f2",
                muted: "#555555",
                border: "#e0e0e0",
                heading_font: "'Libre Caslon Text', 'Times New Roman', serif",
                body_font: "'Libre Franklin', Helvetica, sans-serif",
            },
            Theme::Minimal => Palette {
                background: "#fafafa",
                foreground: "#18181b",
                primary: "#3f3f46",
                primary_foreground: "#fafafa",
                secondary: "#f4f4f5",
                muted: "#71717a",
                border: "#e4e4e7",
                heading_font: "'Inter', system-ui, sans-serif",
                body_font: "'Inter', system-ui, sans-serif",
            },
            Theme::Bold => Palette {
                background: "#0f172a",
                foreground: "#f8fafc",
                primary: "#f59e0b",
                primary_foreground: "#0f172a",
                secondary: "#1e293b",
                muted: "#94a3b8",
                border: "#334155",
                heading_font: "'Archivo Black', Impact, sans-serif",
                body_font: "'Archivo', system-ui, sans-serif",
            },
            Theme::Serene => Palette {
                background: "#f6f9f7",
                foreground: "#1d2b25",
                primary: "#3f7d68",
                primary_foreground: "#ffffff",
                secondary: "#e3efe9",
                muted: "#5c7067",
                border: "#d4e3dc",
                heading_font: "'Cormorant Garamond', Georgia, serif",
                body_font: "'Nunito Sans', system-ui, sans-serif",
            },
        }
    }

    /// Inline style declaring the palette as CSS custom properties.
    pub fn css_vars(self) -> String {
        let p = self.palette();
        format!(
            "--background: {}; --foreground: {}; --primary: {}; --primary-foreground: {}; \
             --secondary: {}; --muted: {}; --border: {}; --heading-font: {}; --body-font: {};",
            p.background,
            p.foreground,
            p.primary,
            p.primary_foreground,
            p.secondary,
            p.muted,
            p.border,
            p.heading_font,
            p.body_font,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slugs_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_slug(theme.slug()), Some(theme));
        }
    }

    #[test]
    fn unknown_slug_has_no_theme() {
        assert_eq!(Theme::from_slug("neon"), None);
        assert_eq!(Theme::from_slug(""), None);
        assert_eq!(Theme::from_slug("Classic"), None);
    }

    #[test]
    fn every_variant_has_its_own_palette() {
        let styles: HashSet<_> = Theme::ALL.into_iter().map(Theme::css_vars).collect();
        assert_eq!(styles.len(), Theme::ALL.len());
    }

    #[test]
    fn css_vars_declare_primary() {
        let style = Theme::Warm.css_vars();
        assert!(style.contains("--primary: #b4532a;"));
        assert!(style.starts_with("--background: #fdf8f3;"));
    }
}
