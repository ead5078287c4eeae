/// An image element on the page that receives a plot once its data arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Total,
    EngagementRate,
    CompositeScore,
    Sentiment,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Placeholder::Total,
        Placeholder::EngagementRate,
        Placeholder::CompositeScore,
        Placeholder::Sentiment,
    ];

    /// Element id the page exposes for this placeholder.
    pub fn element_id(self) -> &'static str {
        match self {
            Placeholder::Total => "total-placeholder",
            Placeholder::EngagementRate => "engagement-rate-placeholder",
            Placeholder::CompositeScore => "composite-score-placeholder",
            Placeholder::Sentiment => "sentiment-placeholder",
        }
    }

    /// Response field that carries this placeholder's image.
    pub fn field_name(self) -> &'static str {
        match self {
            Placeholder::Total => "total_plot",
            Placeholder::EngagementRate => "engagement_rate_plot",
            Placeholder::CompositeScore => "composite_score_plot",
            Placeholder::Sentiment => "senti_plot",
        }
    }
}
