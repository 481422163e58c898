use crate::color::{Color, Hsl};

/// Number of ANSI palette slots.
pub const SLOT_COUNT: usize = 16;

/// Slots 0-7 are the normal colors, 8-15 their bright counterparts.
pub const BASE_COUNT: usize = 8;

/// Lightness added to a base color to derive its linked bright.
pub const DEFAULT_BRIGHT_BOOST: f64 = 0.12;

/// Slot selected when a session starts (blue).
pub const INITIAL_SELECTION: usize = 4;

/// A full 16-color palette in the form sent to the terminal.
pub type Palette = [Color; SLOT_COUNT];

/// The HSL component a nudge acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Hue, Channel::Saturation, Channel::Lightness];

    pub fn index(self) -> usize {
        match self {
            Channel::Hue => 0,
            Channel::Saturation => 1,
            Channel::Lightness => 2,
        }
    }

    /// Channel at `index` modulo 3.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Hue => "H",
            Channel::Saturation => "S",
            Channel::Lightness => "L",
        }
    }

    fn get(self, hsl: &Hsl) -> f64 {
        match self {
            Channel::Hue => hsl.h,
            Channel::Saturation => hsl.s,
            Channel::Lightness => hsl.l,
        }
    }
}

/// Per-channel nudge magnitudes, indexed by [`Channel::index`].
///
/// The values are tuned for visible but fine steps rather than derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSizes {
    pub small: [f64; 3],
    pub big: [f64; 3],
}

impl StepSizes {
    pub const SMALL: [f64; 3] = [1.0 / 360.0, 0.01, 0.02];
    pub const BIG: [f64; 3] = [5.0 / 360.0, 0.05, 0.08];

    pub fn step(&self, channel: Channel, big: bool) -> f64 {
        let table = if big { &self.big } else { &self.small };
        table[channel.index()]
    }
}

impl Default for StepSizes {
    fn default() -> Self {
        Self {
            small: Self::SMALL,
            big: Self::BIG,
        }
    }
}

/// The 16 editable colors plus the link-brights derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteModel {
    colors: [Hsl; SLOT_COUNT],
    link_brights: bool,
    boost: f64,
}

impl PaletteModel {
    pub fn new(palette: &Palette) -> Self {
        Self {
            colors: palette.map(Color::to_hsl),
            link_brights: false,
            boost: DEFAULT_BRIGHT_BOOST,
        }
    }

    /// Use a different lightness boost for linked brights. Clamped to [0, 1].
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = boost.clamp(0.0, 1.0);
        self
    }

    pub fn colors(&self) -> &[Hsl; SLOT_COUNT] {
        &self.colors
    }

    pub fn color(&self, index: usize) -> Hsl {
        self.colors[index % SLOT_COUNT]
    }

    pub fn link_brights(&self) -> bool {
        self.link_brights
    }

    pub fn set_link_brights(&mut self, on: bool) {
        self.link_brights = on;
    }

    pub fn boost(&self) -> f64 {
        self.boost
    }

    /// Store `value` in one channel of a slot, wrapping hue and clamping the rest.
    pub fn set_channel(&mut self, index: usize, channel: Channel, value: f64) {
        let slot = &mut self.colors[index % SLOT_COUNT];
        let Hsl { h, s, l } = *slot;
        *slot = match channel {
            Channel::Hue => Hsl::new(value, s, l),
            Channel::Saturation => Hsl::new(h, value, l),
            Channel::Lightness => Hsl::new(h, s, value),
        };
    }

    /// Add a signed step to one channel of a slot.
    pub fn nudge(&mut self, index: usize, channel: Channel, delta: f64) {
        let current = channel.get(&self.color(index));
        self.set_channel(index, channel, current + delta);
    }

    /// Brights derived from slots 0-7: same hue and saturation, lightness
    /// raised by `boost` and clamped to 1.
    pub fn derive_brights(&self, boost: f64) -> [Hsl; BASE_COUNT] {
        std::array::from_fn(|i| {
            let Hsl { h, s, l } = self.colors[i];
            Hsl::new(h, s, (l + boost).clamp(0.0, 1.0))
        })
    }

    /// The 16 colors actually pushed to the terminal and saved to disk.
    pub fn effective_palette(&self) -> Palette {
        if !self.link_brights {
            return self.colors.map(Hsl::to_rgb);
        }
        let brights = self.derive_brights(self.boost);
        std::array::from_fn(|i| {
            if i < BASE_COUNT {
                self.colors[i].to_rgb()
            } else {
                brights[i - BASE_COUNT].to_rgb()
            }
        })
    }

    /// Replace every slot with `preset`. Link mode and boost are kept.
    pub fn reset(&mut self, preset: &Palette) {
        self.colors = preset.map(Color::to_hsl);
    }
}

/// Everything a session edits: the palette plus the selection cursors.
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    palette: PaletteModel,
    selected: usize,
    channel: Channel,
    steps: StepSizes,
}

impl EditState {
    /// Start editing `palette` with slot 4 and the lightness channel selected.
    pub fn new(palette: PaletteModel) -> Self {
        Self {
            palette,
            selected: INITIAL_SELECTION,
            channel: Channel::Lightness,
            steps: StepSizes::default(),
        }
    }

    pub fn with_steps(mut self, steps: StepSizes) -> Self {
        self.steps = steps;
        self
    }

    pub fn palette(&self) -> &PaletteModel {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut PaletteModel {
        &mut self.palette
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_channel(&self) -> Channel {
        self.channel
    }

    pub fn steps(&self) -> &StepSizes {
        &self.steps
    }

    pub fn selected_color(&self) -> Hsl {
        self.palette.color(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index % SLOT_COUNT;
    }

    pub fn select_next(&mut self) {
        self.select(self.selected + 1);
    }

    pub fn select_prev(&mut self) {
        self.select(self.selected + SLOT_COUNT - 1);
    }

    pub fn next_channel(&mut self) {
        self.channel = self.channel.next();
    }

    pub fn prev_channel(&mut self) {
        self.channel = self.channel.prev();
    }

    /// Nudge the selected channel of the selected slot by one small or big step.
    pub fn nudge_selected(&mut self, big: bool, sign: i8) {
        let delta = f64::from(sign.signum()) * self.steps.step(self.channel, big);
        self.palette.nudge(self.selected, self.channel, delta);
    }

    pub fn toggle_link_brights(&mut self) {
        let on = !self.palette.link_brights();
        self.palette.set_link_brights(on);
    }
}
