//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, HelpTexts, HintTexts, ModalTexts, PaginationTexts, RosterTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Anime Roster",
        none: "(none)",
    },

    hints: HintTexts {
        select: "Select",
        page: "Page",
        details: "Details",
        help: "Help",
        language: "Language",
        quit: "Quit",
        close: "Close",
    },

    roster: RosterTexts {
        title: "Characters",
        loading: "Loading characters...",
        empty: "No characters found",
        load_failed: "Could not load characters",
        characters_loaded: "characters loaded",
        language_changed: "Language",
    },

    pagination: PaginationTexts {
        previous: "Previous",
        next: "Next",
        page: "Page",
    },

    modal: ModalTexts {
        detail_title: "Character",
        name: "Name",
        image: "Image",
        role: "Role",
        status: "Status",
        gender: "Gender",
        close_hint: "Press Esc or Enter to close",
    },

    help: HelpTexts {
        title: "Help",
        move_cursor: "Move cursor",
        previous_page: "Previous page",
        next_page: "Next page",
        open_details: "Show details",
        close_popup: "Close popup",
        cycle_language: "Switch language",
        show_help: "This help",
        quit: "Quit",
    },
};
