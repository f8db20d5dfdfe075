use yew::prelude::*;

/// Stable names for the tile artwork. Content records carry one of these and
/// the view resolves it through [`icon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconId {
    Sparkle,
    BrainCircuit,
    LayoutTemplate,
    HardDrive,
    EarthLock,
    Construction,
    Users,
    Building,
}

impl IconId {
    pub fn name(self) -> &'static str {
        match self {
            IconId::Sparkle => "sparkle",
            IconId::BrainCircuit => "brain-circuit",
            IconId::LayoutTemplate => "layout-template",
            IconId::HardDrive => "hard-drive",
            IconId::EarthLock => "earth-lock",
            IconId::Construction => "construction",
            IconId::Users => "users",
            IconId::Building => "building",
        }
    }
}

fn shapes(id: IconId) -> Html {
    match id {
        IconId::Sparkle => html! {
            <>
                <path d="M9.94 14.06 3 12l6.94-2.06L12 3l2.06 6.94L21 12l-6.94 2.06L12 21z" />
            </>
        },
        IconId::BrainCircuit => html! {
            <>
                <path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18z" />
                <path d="M9 13a4.5 4.5 0 0 0 3-4" />
                <path d="M12 13h4" />
                <path d="M12 18h6a2 2 0 0 1 2 2v1" />
                <path d="M12 8h8" />
                <path d="M16 8V5a2 2 0 0 1 2-2" />
                <circle cx="16" cy="13" r=".5" />
                <circle cx="18" cy="3" r=".5" />
                <circle cx="20" cy="21" r=".5" />
                <circle cx="20" cy="8" r=".5" />
            </>
        },
        IconId::LayoutTemplate => html! {
            <>
                <rect width="18" height="7" x="3" y="3" rx="1" />
                <rect width="9" height="7" x="3" y="14" rx="1" />
                <rect width="5" height="7" x="16" y="14" rx="1" />
            </>
        },
        IconId::HardDrive => html! {
            <>
                <line x1="22" x2="2" y1="12" y2="12" />
                <path d="M5.45 5.11 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z" />
                <line x1="6" x2="6.01" y1="16" y2="16" />
                <line x1="10" x2="10.01" y1="16" y2="16" />
            </>
        },
        IconId::EarthLock => html! {
            <>
                <path d="M7 3.34V5a3 3 0 0 0 3 3" />
                <path d="M11 21.95V18a2 2 0 0 0-2-2 2 2 0 0 1-2-2v-1a2 2 0 0 0-2-2H2.05" />
                <path d="M21.54 15H17a2 2 0 0 0-2 2v4.54" />
                <path d="M12 2a10 10 0 1 0 9.54 13" />
                <path d="M20 6V4a2 2 0 1 0-4 0v2" />
                <rect width="8" height="5" x="14" y="6" rx="1" />
            </>
        },
        IconId::Construction => html! {
            <>
                <rect x="2" y="6" width="20" height="8" rx="1" />
                <path d="M17 14v7" />
                <path d="M7 14v7" />
                <path d="M17 3v3" />
                <path d="M7 3v3" />
                <path d="M10 14 2.3 6.3" />
                <path d="m14 6 7.7 7.7" />
                <path d="m8 6 8 8" />
            </>
        },
        IconId::Users => html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </>
        },
        IconId::Building => html! {
            <>
                <rect width="16" height="20" x="4" y="2" rx="2" ry="2" />
                <path d="M9 22v-4h6v4" />
                <path d="M8 6h.01" />
                <path d="M16 6h.01" />
                <path d="M12 6h.01" />
                <path d="M12 10h.01" />
                <path d="M12 14h.01" />
                <path d="M16 10h.01" />
                <path d="M16 14h.01" />
                <path d="M8 10h.01" />
                <path d="M8 14h.01" />
            </>
        },
    }
}

pub fn icon(id: IconId) -> Html {
    html! {
        <svg
            class={classes!("tile-icon", format!("icon-{}", id.name()))}
            width="36"
            height="36"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shapes(id) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn icon_names_are_distinct() {
        let all = [
            IconId::Sparkle,
            IconId::BrainCircuit,
            IconId::LayoutTemplate,
            IconId::HardDrive,
            IconId::EarthLock,
            IconId::Construction,
            IconId::Users,
            IconId::Building,
        ];
        let names: HashSet<_> = all.iter().map(|id| id.name()).collect();
        assert_eq!(names.len(), all.len());
    }
}
