//! The color value and its baseline.
//!
//! A [`ColorValue`] holds one [`Snapshot`] of working fields plus a shared,
//! immutable baseline snapshot. RGB, HSL and (when tracked) CMYK inside a
//! snapshot always describe the same color: every write goes through one of
//! the `derive_from_*` methods, which rebuild the dependent representations.
//!
//! # Baseline protocol
//!
//! Every mutating operation:
//!
//! 1. mutates the receiver's working fields,
//! 2. detaches a copy of the result (sharing the baseline),
//! 3. restores the receiver's working fields from its baseline,
//! 4. returns the detached copy.
//!
//! A freshly constructed value is its own baseline, so it is observably
//! unchanged by any operation. Results must be chained through return values:
//!
//! ```rust
//! use tinct_color::ColorValue;
//!
//! let mut red: ColorValue = "#ff0000".parse().unwrap();
//! let mut darker = red.darken(0.5, false);
//! let darkest = darker.darken(0.5, false);
//!
//! assert_eq!(red.hex(), "#ff0000");
//! assert_eq!(darker.hex(), "#800000");
//! assert_eq!(darkest.hex(), "#400000");
//! ```
//!
//! Calling an operation on a *derived* handle also restores that handle to
//! the shared baseline (`darker` above now reads `#ff0000`). Use
//! [`ColorValue::rebaseline`] to make a derived value its own baseline.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, trace};

use tinct_core::numeric::{clamp_or, fraction_or, round_half_up, to_channel, wrap_hue};
use tinct_core::{Cmyk, Error, Hsla, Result, Rgba, contrast_ratio, relative_luminance};

use crate::convert::{cmyk_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsl};
use crate::notation::{self, Notation, Parsed};
use crate::resolver::{ColorResolver, CssNamedColors};

// ============================================================================
// Snapshot
// ============================================================================

/// One consistent set of color fields.
///
/// Snapshots are plain data. The baseline of a [`ColorValue`] is a
/// snapshot, handed out read-only by [`ColorValue::baseline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha in `[0, 1]`
    pub a: f64,
    /// Hue in `[0, 360)`
    pub h: f64,
    /// Saturation in `[0, 100]`
    pub s: f64,
    /// Lightness in `[0, 100]`
    pub l: f64,
    /// CMYK percentages, present when CMYK is tracked
    pub cmyk: Option<Cmyk>,
}

impl Snapshot {
    /// Builds a snapshot from RGB, deriving HSL and optionally CMYK.
    pub fn from_rgba(rgba: Rgba, track_cmyk: bool) -> Self {
        let mut snap = Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: fraction_or(rgba.a, 1.0),
            h: 0.0,
            s: 0.0,
            l: 0.0,
            cmyk: track_cmyk.then(Cmyk::default),
        };
        snap.derive_from_rgb();
        snap
    }

    /// Builds a snapshot from HSL, deriving RGB and optionally CMYK.
    pub fn from_hsla(hsla: Hsla, track_cmyk: bool) -> Self {
        let mut snap = Self {
            r: 0,
            g: 0,
            b: 0,
            a: fraction_or(hsla.a, 1.0),
            h: wrap_hue(hsla.h),
            s: clamp_or(hsla.s, 100.0, 100.0),
            l: clamp_or(hsla.l, 50.0, 100.0),
            cmyk: track_cmyk.then(Cmyk::default),
        };
        snap.derive_from_hsl();
        snap
    }

    /// Builds a CMYK-tracking snapshot from CMYK, deriving RGB and HSL.
    pub fn from_cmyka(cmyk: Cmyk, a: f64) -> Self {
        let mut snap = Self {
            r: 0,
            g: 0,
            b: 0,
            a: fraction_or(a, 1.0),
            h: 0.0,
            s: 0.0,
            l: 0.0,
            cmyk: Some(clamp_cmyk(cmyk)),
        };
        snap.derive_from_cmyk();
        snap
    }

    /// Rebuilds HSL, and CMYK if tracked, from the RGB channels.
    pub fn derive_from_rgb(&mut self) {
        let (h, s, l) = rgb_to_hsl(self.r, self.g, self.b);
        self.h = h;
        self.s = s;
        self.l = l;
        self.refresh_cmyk();
    }

    /// Rebuilds RGB, and CMYK if tracked, from the HSL fields.
    pub fn derive_from_hsl(&mut self) {
        let [r, g, b] = hsl_to_rgb(self.h, self.s, self.l);
        self.r = r;
        self.g = g;
        self.b = b;
        self.refresh_cmyk();
    }

    /// Rebuilds RGB and HSL from the CMYK fields.
    ///
    /// No-op when CMYK is not tracked.
    pub fn derive_from_cmyk(&mut self) {
        let Some(cmyk) = self.cmyk else {
            return;
        };
        let [r, g, b] = cmyk_to_rgb(&cmyk);
        self.r = r;
        self.g = g;
        self.b = b;
        let (h, s, l) = rgb_to_hsl(r, g, b);
        self.h = h;
        self.s = s;
        self.l = l;
    }

    fn refresh_cmyk(&mut self) {
        if self.cmyk.is_some() {
            self.cmyk = Some(rgb_to_cmyk(self.r, self.g, self.b));
        }
    }

    /// WCAG relative luminance.
    #[inline]
    pub fn luminance(&self) -> f64 {
        relative_luminance(self.r, self.g, self.b)
    }

    /// RGB channels plus alpha.
    #[inline]
    pub fn rgba(&self) -> Rgba {
        Rgba::new(self.r, self.g, self.b, self.a)
    }

    /// HSL fields plus alpha.
    #[inline]
    pub fn hsla(&self) -> Hsla {
        Hsla::new(self.h, self.s, self.l, self.a)
    }

    /// Returns `true` when `r == g == b`.
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::from_rgba(Rgba::BLACK, false)
    }
}

fn clamp_cmyk(cmyk: Cmyk) -> Cmyk {
    let ink = |v: f64| clamp_or(v, 0.0, 100.0);
    Cmyk::new(ink(cmyk.c), ink(cmyk.m), ink(cmyk.y), ink(cmyk.k))
}

fn channel(v: f64) -> u8 {
    to_channel(clamp_or(v, 0.0, 255.0))
}

// ============================================================================
// ColorValue
// ============================================================================

/// A color in RGB, HSL, optional CMYK and alpha, tied to a baseline.
///
/// `Clone` (and [`copy`](Self::copy)) share the baseline;
/// [`rebaseline`](Self::rebaseline) detaches it.
///
/// # Example
///
/// ```rust
/// use tinct_color::ColorValue;
///
/// let red = ColorValue::parse("#ff0000").unwrap();
/// assert_eq!(red.hsl_string(), "hsl(0,100%,50%)");
///
/// let black = ColorValue::parse("#000000").unwrap().with_cmyk();
/// assert_eq!(black.cmyk().map(|c| c.k), Some(100.0));
/// ```
#[derive(Debug, Clone)]
pub struct ColorValue {
    pub(crate) state: Snapshot,
    baseline: Arc<Snapshot>,
}

impl ColorValue {
    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// Creates a root value from hand-built fields.
    ///
    /// RGB is authoritative: HSL, and CMYK when present, are re-derived
    /// from it and alpha is clamped, so the value is always consistent.
    ///
    /// ```rust
    /// use tinct_color::ColorValue;
    ///
    /// let mut snap = *ColorValue::parse("#ff0000").unwrap().snapshot();
    /// snap.h = 120.0;
    /// let red = ColorValue::from_snapshot(snap);
    /// assert_eq!(red.hsl_string(), "hsl(0,100%,50%)");
    /// ```
    pub fn from_snapshot(mut state: Snapshot) -> Self {
        state.a = fraction_or(state.a, 1.0);
        state.derive_from_rgb();
        Self::root(state)
    }

    /// A root value over an already consistent snapshot.
    fn root(state: Snapshot) -> Self {
        Self {
            state,
            baseline: Arc::new(state),
        }
    }

    /// Parses hex, functional notations and CSS named colors.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidNotation`] when nothing recognizes the string.
    pub fn parse(notation: &str) -> Result<Self> {
        Self::parse_with(notation, &CssNamedColors)
    }

    /// Parses owned notations, delegating anything else to `resolver`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::ColorValue;
    /// use tinct_color::resolver::NoResolver;
    ///
    /// assert!(ColorValue::parse_with("white", &NoResolver).is_err());
    /// let brand = |s: &str| (s == "brand").then_some([255, 102, 0, 255]);
    /// assert_eq!(ColorValue::parse_with("brand", &brand).unwrap().hex(), "#ff6600");
    /// ```
    pub fn parse_with<R: ColorResolver + ?Sized>(notation: &str, resolver: &R) -> Result<Self> {
        let state = match notation::parse(notation) {
            Some(Parsed::Rgb(rgba)) => Snapshot::from_rgba(rgba, false),
            Some(Parsed::Hsl(hsla)) => Snapshot::from_hsla(hsla, false),
            Some(Parsed::Cmyk(cmyk, a)) => Snapshot::from_cmyka(cmyk, a),
            None => match resolver.resolve(notation) {
                Some(bytes) => {
                    debug!(notation, ?bytes, "resolved by color-string resolver");
                    Snapshot::from_rgba(Rgba::from_bytes(bytes), false)
                }
                None => {
                    debug!(notation, "unparsable color notation");
                    return Err(Error::invalid_notation(notation));
                }
            },
        };
        Ok(Self::root(state))
    }

    /// Creates a value from RGB channels and alpha.
    ///
    /// Channels are clamped to `0..=255` and rounded; NaN alpha means opaque.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        let rgba = Rgba::new(channel(r), channel(g), channel(b), fraction_or(a, 1.0));
        Self::root(Snapshot::from_rgba(rgba, false))
    }

    /// Creates a value from hue, saturation, lightness and alpha.
    ///
    /// NaN falls back to `h = 0`, `s = 100`, `l = 50`, `a = 1`.
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self::root(Snapshot::from_hsla(Hsla::new(h, s, l, a), false))
    }

    /// Creates a CMYK-tracking value from ink percentages and alpha.
    pub fn from_cmyka(c: f64, m: f64, y: f64, k: f64, a: f64) -> Self {
        Self::root(Snapshot::from_cmyka(Cmyk::new(c, m, y, k), a))
    }

    /// Enables CMYK tracking on the working fields and the baseline.
    ///
    /// A baseline that already tracks CMYK stays shared. Otherwise the
    /// handle gets its own CMYK-tracking baseline and no longer shares it
    /// with its siblings.
    pub fn with_cmyk(mut self) -> Self {
        if self.state.cmyk.is_none() {
            self.state.cmyk = Some(rgb_to_cmyk(self.state.r, self.state.g, self.state.b));
        }
        if self.baseline.cmyk.is_none() {
            let mut baseline = *self.baseline;
            baseline.cmyk = Some(rgb_to_cmyk(baseline.r, baseline.g, baseline.b));
            self.baseline = Arc::new(baseline);
        }
        self
    }

    // ------------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------------

    /// A copy sharing this value's baseline.
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// A copy whose baseline is its current fields.
    ///
    /// ```rust
    /// use tinct_color::ColorValue;
    ///
    /// let mut grey = ColorValue::parse("#808080").unwrap();
    /// let mut light = grey.lighten(0.5, false).rebaseline();
    /// let _ = light.invert();
    /// assert_eq!(light, light.baseline_value());
    /// assert!(!light.shares_baseline(&grey));
    /// ```
    pub fn rebaseline(&self) -> Self {
        Self::root(self.state)
    }

    /// The baseline snapshot.
    #[inline]
    pub fn baseline(&self) -> &Snapshot {
        &self.baseline
    }

    /// The baseline as a value of its own.
    pub fn baseline_value(&self) -> Self {
        Self {
            state: *self.baseline,
            baseline: Arc::clone(&self.baseline),
        }
    }

    /// Returns `true` when both handles share one baseline.
    #[inline]
    pub fn shares_baseline(&self, other: &ColorValue) -> bool {
        Arc::ptr_eq(&self.baseline, &other.baseline)
    }

    /// The working fields.
    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    /// Restores the working fields from the baseline.
    pub fn reset(&mut self) {
        self.state = *self.baseline;
    }

    /// Detaches the working fields as the result and restores the receiver.
    pub(crate) fn commit(&mut self) -> ColorValue {
        let result = self.copy();
        self.reset();
        result
    }

    /// Runs `op` on the working fields under the baseline protocol.
    pub(crate) fn apply(&mut self, op: impl FnOnce(&mut Snapshot)) -> ColorValue {
        op(&mut self.state);
        self.commit()
    }

    // ------------------------------------------------------------------------
    // Getters
    // ------------------------------------------------------------------------

    /// Red channel.
    #[inline]
    pub fn red(&self) -> u8 {
        self.state.r
    }

    /// Green channel.
    #[inline]
    pub fn green(&self) -> u8 {
        self.state.g
    }

    /// Blue channel.
    #[inline]
    pub fn blue(&self) -> u8 {
        self.state.b
    }

    /// Alpha in `[0, 1]`.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.state.a
    }

    /// Hue in degrees.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.state.h
    }

    /// Saturation in percent.
    #[inline]
    pub fn saturation(&self) -> f64 {
        self.state.s
    }

    /// Lightness in percent.
    #[inline]
    pub fn lightness(&self) -> f64 {
        self.state.l
    }

    /// Structured RGB form.
    #[inline]
    pub fn rgba(&self) -> Rgba {
        self.state.rgba()
    }

    /// Structured HSL form.
    #[inline]
    pub fn hsla(&self) -> Hsla {
        self.state.hsla()
    }

    /// Structured CMYK form, when tracked.
    #[inline]
    pub fn cmyk(&self) -> Option<Cmyk> {
        self.state.cmyk
    }

    /// CMYK, computed on the fly when not tracked.
    pub fn cmyk_values(&self) -> Cmyk {
        self.state
            .cmyk
            .unwrap_or_else(|| rgb_to_cmyk(self.state.r, self.state.g, self.state.b))
    }

    /// Returns `true` when CMYK is tracked.
    #[inline]
    pub fn tracks_cmyk(&self) -> bool {
        self.state.cmyk.is_some()
    }

    /// Returns `true` when `r == g == b`.
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.state.is_achromatic()
    }

    /// WCAG relative luminance.
    #[inline]
    pub fn luminance(&self) -> f64 {
        self.state.luminance()
    }

    /// WCAG contrast ratio against `other`, in `[1, 21]`.
    pub fn contrast_ratio(&self, other: &ColorValue) -> f64 {
        contrast_ratio(self.luminance(), other.luminance())
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        notation::format_hex(&self.rgba())
    }

    /// `#rrggbbaa`
    pub fn hexa(&self) -> String {
        notation::format_hexa(&self.rgba())
    }

    /// `rgb(r,g,b)`
    pub fn rgb_string(&self) -> String {
        notation::format_rgb(&self.rgba())
    }

    /// `rgba(r,g,b,a)`
    pub fn rgba_string(&self) -> String {
        notation::format_rgba(&self.rgba())
    }

    /// `hsl(h,s%,l%)`
    pub fn hsl_string(&self) -> String {
        notation::format_hsl(&self.hsla())
    }

    /// `hsla(h,s%,l%,a)`
    pub fn hsla_string(&self) -> String {
        notation::format_hsla(&self.hsla())
    }

    /// `cmyk(c,m,y,k)`
    pub fn cmyk_string(&self) -> String {
        notation::format_cmyk(&self.cmyk_values())
    }

    /// Formats the value in the requested notation.
    ///
    /// ```rust
    /// use tinct_color::{ColorValue, Notation};
    ///
    /// let c = ColorValue::from_rgba(255.0, 0.0, 0.0, 0.5);
    /// assert_eq!(c.format(Notation::Rgba), "rgba(255,0,0,0.5)");
    /// assert_eq!(c.format(Notation::Hexa), "#ff000080");
    /// ```
    pub fn format(&self, notation: Notation) -> String {
        match notation {
            Notation::Hex => self.hex(),
            Notation::Hexa => self.hexa(),
            Notation::Rgb => self.rgb_string(),
            Notation::Rgba => self.rgba_string(),
            Notation::Hsl => self.hsl_string(),
            Notation::Hsla => self.hsla_string(),
            Notation::Cmyk => self.cmyk_string(),
            Notation::Cmyka => notation::format_cmyka(&self.cmyk_values(), self.state.a),
        }
    }

    // ------------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------------

    /// Sets the hue in degrees, wrapped into `[0, 360)`. NaN means `0`.
    pub fn set_hue(&mut self, h: f64) -> ColorValue {
        trace!(h, "set_hue");
        self.apply(|s| {
            s.h = wrap_hue(h);
            s.derive_from_hsl();
        })
    }

    /// Sets saturation, rounded to a whole percent. NaN means `100`.
    pub fn set_saturation(&mut self, sat: f64) -> ColorValue {
        trace!(sat, "set_saturation");
        self.apply(|s| {
            s.s = round_half_up(clamp_or(sat, 100.0, 100.0));
            s.derive_from_hsl();
        })
    }

    /// Sets lightness, rounded to a whole percent. NaN means `50`.
    pub fn set_lightness(&mut self, l: f64) -> ColorValue {
        trace!(l, "set_lightness");
        self.apply(|s| {
            s.l = round_half_up(clamp_or(l, 50.0, 100.0));
            s.derive_from_hsl();
        })
    }

    /// Sets alpha, clamped to `[0, 1]`. NaN means opaque.
    pub fn set_alpha(&mut self, a: f64) -> ColorValue {
        trace!(a, "set_alpha");
        self.apply(|s| s.a = fraction_or(a, 1.0))
    }

    /// Sets all RGB channels and alpha.
    pub fn set_rgb(&mut self, r: f64, g: f64, b: f64, a: f64) -> ColorValue {
        trace!(r, g, b, a, "set_rgb");
        self.apply(|s| {
            s.r = channel(r);
            s.g = channel(g);
            s.b = channel(b);
            s.a = fraction_or(a, 1.0);
            s.derive_from_rgb();
        })
    }

    /// Sets all HSL fields and alpha.
    pub fn set_hsl(&mut self, h: f64, sat: f64, l: f64, a: f64) -> ColorValue {
        trace!(h, sat, l, a, "set_hsl");
        self.apply(|s| {
            let cmyk = s.cmyk.is_some();
            *s = Snapshot::from_hsla(Hsla::new(h, sat, l, a), cmyk);
        })
    }

    /// Sets all CMYK fields and alpha, enabling CMYK tracking.
    pub fn set_cmyk(&mut self, c: f64, m: f64, y: f64, k: f64, a: f64) -> ColorValue {
        trace!(c, m, y, k, a, "set_cmyk");
        self.apply(|s| *s = Snapshot::from_cmyka(Cmyk::new(c, m, y, k), a))
    }

    /// Sets RGB and alpha from `#rrggbb` / `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidNotation`] for anything else; the receiver is left
    /// untouched.
    pub fn set_hex(&mut self, hex: &str) -> Result<ColorValue> {
        trace!(hex, "set_hex");
        let rgba = notation::parse_hex(hex).ok_or_else(|| Error::invalid_notation(hex))?;
        Ok(self.apply(|s| {
            s.r = rgba.r;
            s.g = rgba.g;
            s.b = rgba.b;
            s.a = rgba.a;
            s.derive_from_rgb();
        }))
    }
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::root(Snapshot::default())
    }
}

impl FromStr for ColorValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Equality of the working fields; baselines are not compared.
impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

/// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.state.a >= 1.0 {
            f.write_str(&self.hex())
        } else {
            f.write_str(&self.hexa())
        }
    }
}
