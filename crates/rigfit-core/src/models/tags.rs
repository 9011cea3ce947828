//! Shared classification tags used across blueprints, exercises and resets.

wire_enum! {
    pub enum DifficultyLevel {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

wire_enum! {
    pub enum PositionTag {
        Sitting => "sitting",
        Standing => "standing",
        Lying => "lying",
        Any => "any",
    }
}

wire_enum! {
    pub enum LocationTag {
        InCab => "in_cab",
        Outside => "outside",
        RestStop => "rest_stop",
        Anywhere => "anywhere",
    }
}

wire_enum! {
    pub enum TimingTag {
        PreDrive => "pre_drive",
        Break => "break",
        PostDrive => "post_drive",
        Anytime => "anytime",
    }
}

wire_enum! {
    pub enum BodyFocusTag {
        UpperBody => "upper_body",
        LowerBody => "lower_body",
        Core => "core",
        FullBody => "full_body",
    }
}

wire_enum! {
    pub enum PainAreaTag {
        LowerBack => "lower_back",
        Neck => "neck",
        Shoulders => "shoulders",
        Hips => "hips",
        Knees => "knees",
        Wrists => "wrists",
        Ankles => "ankles",
    }
}

wire_enum! {
    /// Subscription tier as spelled by preset resets.
    pub enum PlanTier {
        Free => "FREE",
        Pro => "PRO",
        Enterprise => "ENTERPRISE",
    }
}

wire_enum! {
    /// Subscription tier as spelled by users and tips.
    pub enum Tier {
        Free => "free",
        Pro => "pro",
        Enterprise => "enterprise",
    }
}
