//! 葡萄牙语翻译 (pt-BR)

use super::keys::{
    CommonTexts, HelpTexts, HintTexts, ModalTexts, PaginationTexts, RosterTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Anime Roster",
        none: "(nenhum)",
    },

    hints: HintTexts {
        select: "Selecionar",
        page: "Página",
        details: "Detalhes",
        help: "Ajuda",
        language: "Idioma",
        quit: "Sair",
        close: "Fechar",
    },

    roster: RosterTexts {
        title: "Personagens",
        loading: "Carregando personagens...",
        empty: "Nenhum personagem encontrado",
        load_failed: "Não foi possível carregar os personagens",
        characters_loaded: "personagens carregados",
        language_changed: "Idioma",
    },

    pagination: PaginationTexts {
        previous: "Anterior",
        next: "Próxima",
        page: "Página",
    },

    modal: ModalTexts {
        detail_title: "Personagem",
        name: "Nome",
        image: "Imagem",
        role: "Papel",
        status: "Status",
        gender: "Gênero",
        close_hint: "Pressione Esc ou Enter para fechar",
    },

    help: HelpTexts {
        title: "Ajuda",
        move_cursor: "Mover cursor",
        previous_page: "Página anterior",
        next_page: "Próxima página",
        open_details: "Ver detalhes",
        close_popup: "Fechar janela",
        cycle_language: "Trocar idioma",
        show_help: "Esta ajuda",
        quit: "Sair",
    },
};
