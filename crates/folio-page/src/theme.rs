//! Explicit theme values passed to the composer and the asset pipeline.

use serde::Deserialize;

/// Named colours a layout node may use as a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    HeroGradient,
    InfoGradient,
    StakingGradient,
    GrayBackground,
    PreBackground,
    Turquoise,
    Orange,
    Purple,
    Dappnode,
    Avado,
}

impl Swatch {
    /// CSS custom property name for this swatch.
    pub fn css_var(self) -> &'static str {
        match self {
            Self::HeroGradient => "--hero-gradient",
            Self::InfoGradient => "--info-gradient",
            Self::StakingGradient => "--staking-gradient",
            Self::GrayBackground => "--gray-background",
            Self::PreBackground => "--pre-background",
            Self::Turquoise => "--box-turquoise",
            Self::Orange => "--box-orange",
            Self::Purple => "--box-purple",
            Self::Dappnode => "--dappnode",
            Self::Avado => "--avado",
        }
    }
}

/// Site theme. Every field has a default and may be overridden from config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary: String,
    pub text: String,
    pub background: String,
    pub border: String,
    pub button_text: String,
    pub gray_background: String,
    pub pre_background: String,
    pub hero_gradient: String,
    pub info_gradient: String,
    pub staking_gradient: String,
    pub box_turquoise: String,
    pub box_orange: String,
    pub box_purple: String,
    pub dappnode: String,
    pub dappnode_hover: String,
    pub avado: String,
    pub avado_hover: String,

    /// Width at which rows collapse into columns, in pixels
    pub breakpoint_md: u32,
    /// Width at which wide layouts kick in, in pixels
    pub breakpoint_lg: u32,
    /// Base spacing unit in rem; layout gaps are multiples of this
    pub spacing_unit: f32,
    /// Distance kept between a scrolled-to anchor and the viewport top, in pixels
    pub scroll_margin_top: f64,
    pub content_max_width: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#1c1ce1".to_string(),
            text: "#333333".to_string(),
            background: "#ffffff".to_string(),
            border: "#e5e5e5".to_string(),
            button_text: "#ffffff".to_string(),
            gray_background: "#f7f7f7".to_string(),
            pre_background: "#f2f2f2".to_string(),
            hero_gradient: "radial-gradient(ellipse at 50% 50%, rgba(127,127,213,0.2) 0%, rgba(134,168,231,0.2) 50%, rgba(145,234,228,0.2) 100%)".to_string(),
            info_gradient: "linear-gradient(90deg, rgba(145,234,228,0.2) 0%, rgba(127,127,213,0.2) 100%)".to_string(),
            staking_gradient: "linear-gradient(262.78deg, rgba(152,186,249,0.25) 0%, rgba(207,177,251,0.25) 53.12%, rgba(151,252,246,0.25) 100%)".to_string(),
            box_turquoise: "#c8f7ed".to_string(),
            box_orange: "#fde0c8".to_string(),
            box_purple: "#e3d5f9".to_string(),
            dappnode: "#187d76".to_string(),
            dappnode_hover: "#0f5f5f".to_string(),
            avado: "#37822e".to_string(),
            avado_hover: "#2e6d2e".to_string(),
            breakpoint_md: 768,
            breakpoint_lg: 992,
            spacing_unit: 0.25,
            scroll_margin_top: 88.0,
            content_max_width: 1440,
        }
    }
}

impl Theme {
    /// The colour or gradient a swatch refers to.
    pub fn swatch(&self, swatch: Swatch) -> &str {
        match swatch {
            Swatch::HeroGradient => &self.hero_gradient,
            Swatch::InfoGradient => &self.info_gradient,
            Swatch::StakingGradient => &self.staking_gradient,
            Swatch::GrayBackground => &self.gray_background,
            Swatch::PreBackground => &self.pre_background,
            Swatch::Turquoise => &self.box_turquoise,
            Swatch::Orange => &self.box_orange,
            Swatch::Purple => &self.box_purple,
            Swatch::Dappnode => &self.dappnode,
            Swatch::Avado => &self.avado,
        }
    }

    /// Convert a spacing multiple to a CSS length.
    pub fn space(&self, steps: u8) -> String {
        if steps == 0 {
            return "0".to_string();
        }
        format!("{}rem", self.spacing_unit * f32::from(steps))
    }

    /// Emit the theme as a `:root` block of CSS custom properties.
    pub fn css_variables(&self) -> String {
        let swatches = [
            Swatch::HeroGradient,
            Swatch::InfoGradient,
            Swatch::StakingGradient,
            Swatch::GrayBackground,
            Swatch::PreBackground,
            Swatch::Turquoise,
            Swatch::Orange,
            Swatch::Purple,
            Swatch::Dappnode,
            Swatch::Avado,
        ];

        let mut css = String::from(":root {\n");
        css.push_str(&format!("  --primary: {};\n", self.primary));
        css.push_str(&format!("  --text: {};\n", self.text));
        css.push_str(&format!("  --background: {};\n", self.background));
        css.push_str(&format!("  --border: {};\n", self.border));
        css.push_str(&format!("  --button-text: {};\n", self.button_text));
        css.push_str(&format!("  --dappnode-hover: {};\n", self.dappnode_hover));
        css.push_str(&format!("  --avado-hover: {};\n", self.avado_hover));
        for swatch in swatches {
            css.push_str(&format!("  {}: {};\n", swatch.css_var(), self.swatch(swatch)));
        }
        css.push_str(&format!("  --scroll-margin-top: {}px;\n", self.scroll_margin_top));
        css.push_str(&format!("  --content-max-width: {}px;\n", self.content_max_width));
        css.push_str("}\n");
        css
    }

    /// Media query selecting narrow viewports.
    pub fn narrow_media(&self) -> String {
        format!("@media (max-width: {}px)", self.breakpoint_md)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overrides_keep_defaults() {
        let theme: Theme = from_json(r##"{ "primary": "#ff0000", "scroll_margin_top": 40.0 }"##);

        assert_eq!(theme.primary, "#ff0000");
        assert_eq!(theme.scroll_margin_top, 40.0);
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn emits_css_variables() {
        let css = Theme::default().css_variables();

        assert!(css.starts_with(":root {"));
        assert!(css.contains("--primary: #1c1ce1;"));
        assert!(css.contains("--box-turquoise: #c8f7ed;"));
        assert!(css.contains("--scroll-margin-top: 88px;"));
    }

    #[test]
    fn converts_spacing() {
        let theme = Theme::default();
        assert_eq!(theme.space(0), "0");
        assert_eq!(theme.space(8), "2rem");
    }

    fn from_json(json: &str) -> Theme {
        serde_json::from_str(json).unwrap()
    }
}
