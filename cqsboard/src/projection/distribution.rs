use crate::models::Category;

/// Number of colours in a chart palette; colour indices cycle modulo this.
pub const PALETTE_SIZE: usize = 5;

const DEFAULT_COLORS: [&str; PALETTE_SIZE] = ["#2563eb", "#f97316", "#10b981", "#8b5cf6", "#ec4899"];

/// One slice of a donut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSlice {
    pub name: String,
    pub magnitude: f64,
    /// Whole-number share of the total, `None` when the total is zero.
    pub share_percent: Option<u32>,
    pub color_index: usize,
}

/// Share-of-total view of `categories`, largest first.
///
/// Shares are rounded independently for display, so they need not add up to
/// exactly 100.
pub fn distribute(categories: &[Category]) -> Vec<DistributionSlice> {
    let total: f64 = categories.iter().map(|c| c.magnitude).sum();

    let mut sorted: Vec<&Category> = categories.iter().collect();
    sorted.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));

    sorted
        .into_iter()
        .enumerate()
        .map(|(position, category)| DistributionSlice {
            name: category.name.clone(),
            magnitude: category.magnitude,
            share_percent: share_of(category.magnitude, total),
            color_index: position % PALETTE_SIZE,
        })
        .collect()
}

fn share_of(magnitude: f64, total: f64) -> Option<u32> {
    if total > 0.0 {
        Some((100.0 * magnitude / total).round().clamp(0.0, 100.0) as u32)
    } else {
        None
    }
}

/// Maps slice colour indices to concrete colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [&'static str; PALETTE_SIZE],
}

impl Palette {
    pub fn standard() -> Self {
        Self {
            colors: DEFAULT_COLORS,
        }
    }

    /// The standard palette back to front, used so adjacent charts differ.
    pub fn reversed() -> Self {
        let mut colors = DEFAULT_COLORS;
        colors.reverse();
        Self { colors }
    }

    pub fn color(&self, index: usize) -> &'static str {
        self.colors[index % PALETTE_SIZE]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beauty_categories() -> Vec<Category> {
        vec![
            Category::new("Haircare", 250.0),
            Category::new("Skincare", 450.0),
            Category::new("Fragrances", 200.0),
            Category::new("Makeup", 300.0),
        ]
    }

    #[test]
    fn orders_by_magnitude_with_rounded_shares() {
        let slices = distribute(&beauty_categories());

        let names: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Skincare", "Makeup", "Haircare", "Fragrances"]);

        let shares: Vec<Option<u32>> = slices.iter().map(|s| s.share_percent).collect();
        assert_eq!(shares, vec![Some(38), Some(25), Some(21), Some(17)]);
    }

    #[test]
    fn shares_stay_within_bounds() {
        let slices = distribute(&[
            Category::new("a", 1.0),
            Category::new("b", 0.0),
            Category::new("c", 1e9),
        ]);
        assert!(slices.windows(2).all(|w| w[0].magnitude >= w[1].magnitude));
        assert!(slices
            .iter()
            .all(|s| matches!(s.share_percent, Some(p) if p <= 100)));
    }

    #[test]
    fn zero_total_leaves_shares_blank() {
        let slices = distribute(&[Category::new("a", 0.0), Category::new("b", 0.0)]);
        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|s| s.share_percent.is_none()));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(distribute(&[]).is_empty());
    }

    #[test]
    fn color_indices_cycle_through_palette() {
        let categories: Vec<Category> = (0..7)
            .map(|i| Category::new(format!("c{i}"), (10 - i) as f64))
            .collect();

        let indices: Vec<usize> = distribute(&categories)
            .iter()
            .map(|s| s.color_index)
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn reversed_palette_mirrors_standard() {
        let standard = Palette::standard();
        let reversed = Palette::reversed();
        assert_eq!(standard.color(0), "#2563eb");
        assert_eq!(reversed.color(0), "#ec4899");
        assert_eq!(reversed.color(PALETTE_SIZE - 1), standard.color(0));
        assert_eq!(standard.color(PALETTE_SIZE), standard.color(0));
    }
}
