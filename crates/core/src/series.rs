use serde::Serialize;

/// One point on the chart.
///
/// `x` is a synthetic position inside the visible window (`1..=window`
/// nominally), not wall-clock time: every tick renumbers the whole series,
/// so samples that have scrolled off the left edge carry zero or negative
/// positions until the next trim removes them.  `y` is `None` for positions
/// that predate the first real reading — a JS-side charting library receives
/// those as `null` and leaves a gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub x: i32,
    pub y: Option<f64>,
}

/// The rolling window of recent samples shown on the chart.
///
/// Insertion order is chronological (oldest first) and `x` values always
/// span a contiguous numeric range.  [`Series::append`] grows the backing
/// storage without bound by design; callers cap growth with
/// [`Series::trim`] once the buffer has doubled past the visible window.
///
/// All operations are total: none of them can fail, and every one of them
/// returns a fresh `Series` rather than mutating in place, so a renderer
/// holding the previous value never observes a half-applied update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    data: Vec<Sample>,
    /// Visible window width in samples (= seconds at the default tick rate).
    #[serde(skip)]
    window: usize,
}

impl Series {
    /// Build the initial window from a seed of recent readings.
    ///
    /// The result always has exactly `window` samples at positions
    /// `1..=window`.  A seed longer than the window is right-truncated to
    /// its last `window` values; a shorter one is left-padded with `None`
    /// so the seed values occupy the rightmost (most recent) positions.
    pub fn initialize(seed: &[f64], window: usize) -> Self {
        let seed = &seed[seed.len().saturating_sub(window)..];
        let padding = window - seed.len();

        let data = (1..=window as i32)
            .map(|x| {
                let i = x as usize - 1;
                Sample {
                    x,
                    y: if i < padding { None } else { Some(seed[i - padding]) },
                }
            })
            .collect();

        Self { data, window }
    }

    /// Shift the window one step left and append the latest reading.
    ///
    /// Every existing sample's `x` decrements by one; the new sample lands
    /// at `x = window`.  Old samples are *not* removed here — see
    /// [`Series::trim`].
    #[must_use]
    pub fn append(&self, latest: Option<f64>) -> Self {
        let mut data: Vec<Sample> = self
            .data
            .iter()
            .map(|s| Sample { x: s.x - 1, y: s.y })
            .collect();
        data.push(Sample {
            x: self.window as i32,
            y: latest,
        });

        Self {
            data,
            window: self.window,
        }
    }

    /// Drop the oldest `window` samples, keeping the tail.
    ///
    /// Applied once growth has doubled the visible window.  On a series
    /// shorter than the window this yields an empty series, which makes a
    /// misapplied double trim behave like a single trim of twice the depth.
    #[must_use]
    pub fn trim(&self) -> Self {
        let keep = self.data.len().saturating_sub(self.window);
        Self {
            data: self.data[self.data.len() - keep..].to_vec(),
            window: self.window,
        }
    }

    /// Visible window width in samples.
    pub fn window(&self) -> usize {
        self.window
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.data
    }

    /// Samples currently inside the visible window (`x` in `1..=window`).
    pub fn visible(&self) -> impl Iterator<Item = &Sample> + '_ {
        let window = self.window as i32;
        self.data.iter().filter(move |s| s.x >= 1 && s.x <= window)
    }

    /// The most recent reading, if any sample carries one.
    pub fn latest(&self) -> Option<f64> {
        self.data.last().and_then(|s| s.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: usize = 60;

    #[test]
    fn initialize_empty_seed() {
        let series = Series::initialize(&[], WINDOW);

        assert_eq!(series.len(), WINDOW);
        for (i, sample) in series.samples().iter().enumerate() {
            assert_eq!(sample.x, i as i32 + 1);
            assert_eq!(sample.y, None);
        }
    }

    #[test]
    fn initialize_short_seed_is_right_aligned() {
        let series = Series::initialize(&[50.0, 51.0, 52.0], WINDOW);

        assert_eq!(series.len(), WINDOW);
        let samples = series.samples();
        assert!(samples[..WINDOW - 3].iter().all(|s| s.y.is_none()));
        assert_eq!(samples[WINDOW - 3].y, Some(50.0));
        assert_eq!(samples[WINDOW - 2].y, Some(51.0));
        assert_eq!(samples[WINDOW - 1].y, Some(52.0));
    }

    #[test]
    fn initialize_long_seed_keeps_last_window_values() {
        let seed: Vec<f64> = (0..100).map(f64::from).collect();
        let series = Series::initialize(&seed, WINDOW);

        assert_eq!(series.len(), WINDOW);
        for (i, sample) in series.samples().iter().enumerate() {
            assert_eq!(sample.x, i as i32 + 1);
            assert_eq!(sample.y, Some((100 - WINDOW + i) as f64));
        }
    }

    #[test]
    fn append_shifts_and_pushes() {
        let series = Series::initialize(&[42.0], WINDOW);
        let next = series.append(Some(77.0));

        assert_eq!(next.len(), WINDOW + 1);
        let last = next.samples().last().unwrap();
        assert_eq!(last.x, WINDOW as i32);
        assert_eq!(last.y, Some(77.0));

        for (before, after) in series.samples().iter().zip(next.samples()) {
            assert_eq!(after.x, before.x - 1);
            assert_eq!(after.y, before.y);
        }
    }

    #[test]
    fn append_absent_reading() {
        let next = Series::initialize(&[], WINDOW).append(None);
        assert_eq!(next.samples().last().unwrap().y, None);
    }

    #[test]
    fn trim_keeps_tail_unchanged() {
        let mut series = Series::initialize(&[], WINDOW);
        for i in 0..WINDOW + 1 {
            series = series.append(Some(i as f64));
        }
        assert_eq!(series.len(), 2 * WINDOW + 1);

        let tail: Vec<Sample> = series.samples()[WINDOW..].to_vec();
        let trimmed = series.trim();

        assert_eq!(trimmed.len(), WINDOW + 1);
        assert_eq!(trimmed.samples(), &tail[..]);
    }

    #[test]
    fn double_trim_equals_one_trim_of_twice_the_depth() {
        let mut series = Series::initialize(&[], WINDOW);
        for i in 0..WINDOW + 1 {
            series = series.append(Some(i as f64));
        }

        let twice = series.trim().trim();
        assert_eq!(twice.len(), series.len().saturating_sub(2 * WINDOW));
        assert_eq!(twice.samples(), &series.samples()[2 * WINDOW..]);
    }

    #[test]
    fn trim_below_window_yields_empty() {
        let series = Series::initialize(&[1.0, 2.0], 4);
        assert!(series.trim().is_empty());
    }

    #[test]
    fn visible_tracks_the_last_window_samples() {
        let mut series = Series::initialize(&[], 5);
        for i in 0..7 {
            series = series.append(Some(i as f64));
        }

        let visible: Vec<&Sample> = series.visible().collect();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible.first().unwrap().x, 1);
        assert_eq!(visible.last().unwrap().x, 5);
        assert_eq!(visible.last().unwrap().y, Some(6.0));
    }

    #[test]
    fn absent_reading_serializes_as_null() {
        let series = Series::initialize(&[48.5], 2);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"{"data":[{"x":1,"y":null},{"x":2,"y":48.5}]}"#);
    }
}
