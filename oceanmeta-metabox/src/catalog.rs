//! The Ocean field catalog.
//!
//! Declares the complete settings surface: nine sections and their fields,
//! with labels, help text, choice lists, numeric constraints, defaults, and
//! sanitizers. The Post section applies only to the `post` content type and
//! is declared separately.
//!
//! The catalog is data; the registry in [`crate::registry`] validates it
//! against the control table and resolves dynamic choice lists per request.

use oceanmeta_controls::ControlTable;
use oceanmeta_fields::{
    Choices, ControlKind, FieldDef, LookupKind, ManagerDef, NumberAttrs, Sanitizer, SectionDef,
    SettingDef,
};

/// Section ids.
pub const MAIN: &str = "oceanwp_mb_main";
pub const SHORTCODES: &str = "oceanwp_mb_shortcodes";
pub const HEADER: &str = "oceanwp_mb_header";
pub const LOGO: &str = "oceanwp_mb_logo";
pub const MENU: &str = "oceanwp_mb_menu";
pub const TITLE: &str = "oceanwp_mb_title";
pub const BREADCRUMBS: &str = "oceanwp_mb_breadcrumbs";
pub const FOOTER: &str = "oceanwp_mb_footer";
pub const POST: &str = "oceanwp_mb_post";

/// The metabox container, labeled with the theme branding.
pub fn ocean_manager(brand: &str) -> ManagerDef {
    ManagerDef::new("oceanwp_mb_settings", format!("{brand} Settings"))
}

/// The default control table: the seven custom control kinds with their
/// renderer implementations, plus template overrides for the six builtin
/// kinds the surface re-skins.
pub fn ocean_control_table() -> ControlTable {
    let mut table = ControlTable::new();
    for kind in ["select", "color", "image", "text", "number", "textarea"] {
        table.register(
            kind,
            format!("OceanWP_ButterBean_Control_{}", pascal(kind)),
            format!("controls/{kind}/template.php"),
        );
    }
    for kind in [
        "buttonset",
        "range",
        "media",
        "rgba-color",
        "multiple-select",
        "editor",
        "typography",
    ] {
        table.register(
            kind,
            format!("OceanWP_ButterBean_Control_{}", pascal(kind)),
            format!("controls/{kind}/template.php"),
        );
    }
    table
}

fn pascal(kind: &str) -> String {
    kind.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// Sections shown for every supported content type, in tab order.
pub fn ocean_sections() -> Vec<SectionDef> {
    vec![
        SectionDef::new(MAIN, "Main", "dashicons-admin-generic"),
        SectionDef::new(SHORTCODES, "Shortcodes", "dashicons-editor-code"),
        SectionDef::new(HEADER, "Header", "dashicons-sticky"),
        SectionDef::new(LOGO, "Logo", "dashicons-format-image"),
        SectionDef::new(MENU, "Menu", "dashicons-menu"),
        SectionDef::new(TITLE, "Title", "dashicons-admin-tools"),
        SectionDef::new(BREADCRUMBS, "Breadcrumbs", "dashicons-admin-home"),
        SectionDef::new(FOOTER, "Footer", "dashicons-hammer"),
    ]
}

/// The Post section, only registered for the `post` content type.
pub fn post_section() -> SectionDef {
    SectionDef::new(POST, "Post", "dashicons-admin-page")
}

/// The title-style choice table. `centered` is listed twice; the duplicate
/// collapses with last-definition-wins at the first occurrence's position.
pub fn title_style_choices() -> Choices {
    Choices::from_pairs([
        ("", "Default"),
        ("default", "Default Style"),
        ("centered", "Centered"),
        ("centered", "Centered"),
        ("centered-minimal", "Centered Minimal"),
        ("background-image", "Background Image"),
        ("solid-color", "Solid Color and White Text"),
    ])
}

fn display_choices() -> Choices {
    Choices::from_pairs([("default", "Default"), ("on", "Enable"), ("off", "Disable")])
}

/// A plain shortcode text field.
fn shortcode_field(key: &str, label: &str, placement: &str) -> FieldDef {
    FieldDef::new(
        key,
        SHORTCODES,
        ControlKind::Text,
        label,
        format!("Add your shortcode to be displayed {placement}."),
    )
    .sanitized_by(Sanitizer::Text)
}

/// A logo dimension field (px, absint-sanitized).
fn logo_dimension_field(key: &str, label: &str, description: &str) -> FieldDef {
    FieldDef::new(key, LOGO, ControlKind::Number, label, description)
        .with_attrs(NumberAttrs::min_step(0.0, 1.0))
        .sanitized_by(Sanitizer::AbsInt)
}

/// An rgba-color field in the Menu section.
fn menu_color_field(key: &str, label: &str, description: &str) -> FieldDef {
    FieldDef::new(key, MENU, ControlKind::RgbaColor, label, description)
        .sanitized_by(Sanitizer::HexColor)
}

/// A color field in the Breadcrumbs section.
fn breadcrumbs_color_field(key: &str, label: &str, example: &str) -> FieldDef {
    FieldDef::new(
        key,
        BREADCRUMBS,
        ControlKind::Color,
        label,
        format!("Select a color. Hex code, ex: {example}"),
    )
    .sanitized_by(Sanitizer::HexColor)
}

/// Fields shown for every supported content type, in section order.
pub fn ocean_fields() -> Vec<FieldDef> {
    let mut fields = Vec::with_capacity(72);

    // --- Main ---
    fields.push(
        FieldDef::new(
            "ocean_post_layout",
            MAIN,
            ControlKind::Select,
            "Content Layout",
            "Select your custom layout.",
        )
        .with_choices(Choices::from_pairs([
            ("", "Default"),
            ("right-sidebar", "Right Sidebar"),
            ("left-sidebar", "Left Sidebar"),
            ("full-width", "Full Width"),
            ("full-screen", "100% Full Width"),
            ("both-sidebars", "Both Sidebars"),
        ]))
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_both_sidebars_style",
            MAIN,
            ControlKind::Select,
            "Both Sidebars: Style",
            "Select your both sidebars style.",
        )
        .with_choices(Choices::from_pairs([
            ("", "Default"),
            ("ssc-style", "Sidebar / Sidebar / Content"),
            ("scs-style", "Sidebar / Content / Sidebar"),
            ("css-style", "Content / Sidebar / Sidebar"),
        ]))
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_both_sidebars_content_width",
            MAIN,
            ControlKind::Number,
            "Both Sidebars: Content Width (%)",
            "Enter for custom content width.",
        )
        .with_attrs(NumberAttrs::min_step(0.0, 1.0))
        .sanitized_by(Sanitizer::AbsInt),
    );
    fields.push(
        FieldDef::new(
            "ocean_both_sidebars_sidebars_width",
            MAIN,
            ControlKind::Number,
            "Both Sidebars: Sidebars Width (%)",
            "Enter for custom sidebars width.",
        )
        .with_attrs(NumberAttrs::min_step(0.0, 1.0))
        .sanitized_by(Sanitizer::AbsInt),
    );
    fields.push(
        FieldDef::new(
            "ocean_sidebar",
            MAIN,
            ControlKind::Select,
            "Sidebar",
            "Select your custom sidebar.",
        )
        .with_choices(Choices::lookup(LookupKind::WidgetAreas))
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_second_sidebar",
            MAIN,
            ControlKind::Select,
            "Second Sidebar",
            "Select your custom second sidebar.",
        )
        .with_choices(Choices::lookup(LookupKind::WidgetAreas))
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_disable_margins",
            MAIN,
            ControlKind::Buttonset,
            "Paddings",
            "Enable or disable the padding top and bottom.",
        )
        .with_choices(Choices::from_pairs([("enable", "Enable"), ("on", "Disable")]))
        .sanitized_by(Sanitizer::Key)
        .with_default("enable"),
    );
    fields.push(
        FieldDef::new(
            "ocean_add_body_class",
            MAIN,
            ControlKind::Text,
            "Custom Body Class",
            "Use space (space tab) to separate multiple classes. Do not use dots (.) or \
             commas (,) to separate classes. Correct example: class-1 class-2 new-class-3",
        )
        .sanitized_by(Sanitizer::Text),
    );

    // --- Shortcodes ---
    fields.push(shortcode_field(
        "ocean_shortcode_before_top_bar",
        "Shortcode Before Top Bar",
        "before the top bar",
    ));
    fields.push(shortcode_field(
        "ocean_shortcode_after_top_bar",
        "Shortcode After Top Bar",
        "after the top bar",
    ));
    fields.push(shortcode_field(
        "ocean_shortcode_before_header",
        "Shortcode Before Header",
        "before the header",
    ));
    fields.push(shortcode_field(
        "ocean_shortcode_after_header",
        "Shortcode After Header",
        "after the header",
    ));
    // Historical key; the label is what counts.
    fields.push(shortcode_field(
        "ocean_has_shortcode",
        "Shortcode Before Title",
        "before the page title",
    ));
    fields.push(shortcode_field(
        "ocean_shortcode_after_title",
        "Shortcode After Title",
        "after the page title",
    ));
    fields.push(shortcode_field(
        "ocean_shortcode_before_footer_widgets",
        "Shortcode Before Footer Widgets",
        "before the footer widgets",
    ));
    fields.push(shortcode_field(
        "ocean_shortcode_after_footer_widgets",
        "Shortcode After Footer Widgets",
        "after the footer widgets",
    ));
    fields.push(shortcode_field(
        "ocean_shortcode_before_footer_bottom",
        "Shortcode Before Footer Bottom",
        "before the footer bottom",
    ));
    fields.push(shortcode_field(
        "ocean_shortcode_after_footer_bottom",
        "Shortcode After Footer Bottom",
        "after the footer bottom",
    ));

    // --- Header ---
    fields.push(
        FieldDef::new(
            "ocean_display_top_bar",
            HEADER,
            ControlKind::Buttonset,
            "Display Top Bar",
            "Enable or disable the top bar.",
        )
        .with_choices(display_choices())
        .sanitized_by(Sanitizer::Key)
        .with_default("default"),
    );
    fields.push(
        FieldDef::new(
            "ocean_display_header",
            HEADER,
            ControlKind::Buttonset,
            "Display Header",
            "Enable or disable the header.",
        )
        .with_choices(display_choices())
        .sanitized_by(Sanitizer::Key)
        .with_default("default"),
    );
    fields.push(
        FieldDef::new(
            "ocean_header_style",
            HEADER,
            ControlKind::Select,
            "Header Style",
            "Choose which header style to display on this page.",
        )
        .with_choices(Choices::from_pairs([
            ("", "Default"),
            ("minimal", "Minimal"),
            ("transparent", "Transparent"),
            ("top", "Top Menu"),
            ("full_screen", "Full Screen"),
            ("center", "Center"),
            ("medium", "Medium"),
            ("vertical", "Vertical"),
            ("custom", "Custom Header"),
        ]))
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_center_header_left_menu",
            HEADER,
            ControlKind::Select,
            "Left Menu",
            "Choose which left menu to display on this page/post.",
        )
        .with_choices(Choices::lookup(LookupKind::Menus))
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_custom_header_template",
            HEADER,
            ControlKind::Select,
            "Select Template",
            "Choose a template created in Theme Panel > My Library.",
        )
        .with_choices(Choices::lookup(LookupKind::LibraryTemplates))
        .sanitized_by(Sanitizer::Key),
    );

    // --- Logo ---
    fields.push(
        FieldDef::new(
            "ocean_custom_logo",
            LOGO,
            ControlKind::Image,
            "Logo",
            "Select a custom logo on this page/post.",
        )
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_custom_retina_logo",
            LOGO,
            ControlKind::Image,
            "Retina Logo",
            "Select a custom retina logo on this page/post.",
        )
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(logo_dimension_field(
        "ocean_custom_logo_max_width",
        "Max Width (px)",
        "Enter a custom max width for this page/post.",
    ));
    fields.push(logo_dimension_field(
        "ocean_custom_logo_tablet_max_width",
        "Tablet: Max Width (px)",
        "Enter a custom max width for tablet view on this page/post.",
    ));
    fields.push(logo_dimension_field(
        "ocean_custom_logo_mobile_max_width",
        "Mobile: Max Width (px)",
        "Enter a custom max width for mobile view on this page/post.",
    ));
    fields.push(logo_dimension_field(
        "ocean_custom_logo_max_height",
        "Max Height (px)",
        "Enter a custom max height for this page/post.",
    ));
    fields.push(logo_dimension_field(
        "ocean_custom_logo_tablet_max_height",
        "Tablet: Max Height (px)",
        "Enter a custom max height for tablet view on this page/post.",
    ));
    fields.push(logo_dimension_field(
        "ocean_custom_logo_mobile_max_height",
        "Mobile: Max Height (px)",
        "Enter a custom max height for mobile view on this page/post.",
    ));

    // --- Menu ---
    fields.push(
        FieldDef::new(
            "ocean_header_custom_menu",
            MENU,
            ControlKind::Select,
            "Main Navigation Menu",
            "Choose which menu to display on this page/post.",
        )
        .with_choices(Choices::lookup(LookupKind::Menus))
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_menu_typo",
            MENU,
            ControlKind::Typography,
            "Typography",
            "Typography for the menu.",
        )
        .with_setting(SettingDef::new("ocean_menu_typo_font_family", Sanitizer::Text))
        .with_setting(SettingDef::new("ocean_menu_typo_font_size", Sanitizer::Text))
        .with_setting(SettingDef::new("ocean_menu_typo_font_weight", Sanitizer::Key))
        .with_setting(SettingDef::new("ocean_menu_typo_font_style", Sanitizer::Key))
        .with_setting(SettingDef::new("ocean_menu_typo_transform", Sanitizer::Key))
        .with_setting(SettingDef::new("ocean_menu_typo_line_height", Sanitizer::Text))
        .with_setting(SettingDef::new("ocean_menu_typo_spacing", Sanitizer::Text)),
    );
    fields.push(menu_color_field(
        "ocean_menu_link_color",
        "Link Color",
        "Select a color. Hex code, ex: #555",
    ));
    fields.push(menu_color_field(
        "ocean_menu_link_color_hover",
        "Link Color: Hover",
        "Select a color. Hex code, ex: #13aff0",
    ));
    fields.push(menu_color_field(
        "ocean_menu_link_color_active",
        "Link Color: Current Menu Item",
        "Select a color. Hex code, ex: #555",
    ));
    fields.push(menu_color_field(
        "ocean_menu_link_background",
        "Link Background",
        "Select a color. Hex code, ex: #fff",
    ));
    fields.push(menu_color_field(
        "ocean_menu_link_hover_background",
        "Link Background: Hover",
        "Select a color. Hex code, ex: #333",
    ));
    fields.push(menu_color_field(
        "ocean_menu_link_active_background",
        "Link Background: Current Menu Item",
        "Select a color. Hex code, ex: #13aff0",
    ));
    fields.push(menu_color_field(
        "ocean_menu_social_links_bg",
        "Simple Social: Background Color",
        "Select a background color for the simple social style. Hex code, ex: #fff",
    ));
    fields.push(menu_color_field(
        "ocean_menu_social_hover_links_bg",
        "Simple Social: Hover Background Color",
        "Select a background color for the simple social style. Hex code, ex: #333",
    ));
    fields.push(menu_color_field(
        "ocean_menu_social_links_color",
        "Simple Social: Color",
        "Select a color for the simple social style. Hex code, ex: #fff",
    ));
    fields.push(menu_color_field(
        "ocean_menu_social_hover_links_color",
        "Simple Social: Hover Color",
        "Select a color for the simple social style. Hex code, ex: #13aff0",
    ));

    // --- Title ---
    fields.push(
        FieldDef::new(
            "ocean_disable_title",
            TITLE,
            ControlKind::Buttonset,
            "Display Page Title",
            "Enable or disable the page title.",
        )
        .with_choices(Choices::from_pairs([
            ("default", "Default"),
            ("enable", "Enable"),
            ("on", "Disable"),
        ]))
        .sanitized_by(Sanitizer::Key)
        .with_default("default"),
    );
    fields.push(
        FieldDef::new(
            "ocean_disable_heading",
            TITLE,
            ControlKind::Buttonset,
            "Display Heading",
            "Enable or disable the page title heading.",
        )
        .with_choices(Choices::from_pairs([
            ("default", "Default"),
            ("enable", "Enable"),
            ("on", "Disable"),
        ]))
        .sanitized_by(Sanitizer::Key)
        .with_default("default"),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_title",
            TITLE,
            ControlKind::Text,
            "Custom Title",
            "Alter the main title display.",
        )
        .sanitized_by(Sanitizer::RichText),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_subheading",
            TITLE,
            ControlKind::Text,
            "Subheading",
            "Enter your page subheading. Shortcodes & HTML is allowed.",
        )
        .sanitized_by(Sanitizer::RichText),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_title_style",
            TITLE,
            ControlKind::Select,
            "Title Style",
            "Select a custom title style.",
        )
        .with_choices(title_style_choices())
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_title_background_color",
            TITLE,
            ControlKind::Color,
            "Title: Background Color",
            "Select a hex color code, ex: #333",
        )
        .sanitized_by(Sanitizer::HexColor),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_title_background",
            TITLE,
            ControlKind::Image,
            "Title: Background Image",
            "Select a custom image for your main title.",
        )
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_title_bg_image_position",
            TITLE,
            ControlKind::Select,
            "Position",
            "Select your background image position.",
        )
        .with_choices(Choices::from_pairs([
            ("", "Default"),
            ("top left", "Top Left"),
            ("top center", "Top Center"),
            ("top right", "Top Right"),
            ("center left", "Center Left"),
            ("center center", "Center Center"),
            ("center right", "Center Right"),
            ("bottom left", "Bottom Left"),
            ("bottom center", "Bottom Center"),
            ("bottom right", "Bottom Right"),
        ]))
        .sanitized_by(Sanitizer::Text),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_title_bg_image_attachment",
            TITLE,
            ControlKind::Select,
            "Attachment",
            "Select your background image attachment.",
        )
        .with_choices(Choices::from_pairs([
            ("", "Default"),
            ("scroll", "Scroll"),
            ("fixed", "Fixed"),
        ]))
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_title_bg_image_repeat",
            TITLE,
            ControlKind::Select,
            "Repeat",
            "Select your background image repeat.",
        )
        .with_choices(Choices::from_pairs([
            ("", "Default"),
            ("no-repeat", "No-repeat"),
            ("repeat", "Repeat"),
            ("repeat-x", "Repeat-x"),
            ("repeat-y", "Repeat-y"),
        ]))
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_title_bg_image_size",
            TITLE,
            ControlKind::Select,
            "Size",
            "Select your background image size.",
        )
        .with_choices(Choices::from_pairs([
            ("", "Default"),
            ("auto", "Auto"),
            ("cover", "Cover"),
            ("contain", "Contain"),
        ]))
        .sanitized_by(Sanitizer::Key),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_title_height",
            TITLE,
            ControlKind::Number,
            "Title: Background Height",
            "Select your custom height for your title background. Default is 400px.",
        )
        .with_attrs(NumberAttrs::min_step(0.0, 1.0))
        .sanitized_by(Sanitizer::AbsInt),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_title_bg_overlay",
            TITLE,
            ControlKind::Number,
            "Title: Background Overlay Opacity",
            "Enter a number between 0.1 to 1. Default is 0.5.",
        )
        .with_attrs(NumberAttrs {
            min: Some(0.1),
            max: Some(1.0),
            step: Some(0.1),
        })
        .sanitized_by(Sanitizer::Text),
    );
    fields.push(
        FieldDef::new(
            "ocean_post_title_bg_overlay_color",
            TITLE,
            ControlKind::Color,
            "Title: Background Overlay Color",
            "Select a color. Hex code, ex: #333",
        )
        .sanitized_by(Sanitizer::HexColor),
    );

    // --- Breadcrumbs ---
    fields.push(
        FieldDef::new(
            "ocean_disable_breadcrumbs",
            BREADCRUMBS,
            ControlKind::Buttonset,
            "Display Breadcrumbs",
            "Enable or disable the page title breadcrumbs.",
        )
        .with_choices(display_choices())
        .sanitized_by(Sanitizer::Key)
        .with_default("default"),
    );
    fields.push(breadcrumbs_color_field(
        "ocean_breadcrumbs_color",
        "Color",
        "#fff",
    ));
    fields.push(breadcrumbs_color_field(
        "ocean_breadcrumbs_separator_color",
        "Separator Color",
        "#fff",
    ));
    fields.push(breadcrumbs_color_field(
        "ocean_breadcrumbs_links_color",
        "Links Color",
        "#fff",
    ));
    fields.push(breadcrumbs_color_field(
        "ocean_breadcrumbs_links_hover_color",
        "Links Color: Hover",
        "#ddd",
    ));

    // --- Footer ---
    fields.push(
        FieldDef::new(
            "ocean_display_footer_widgets",
            FOOTER,
            ControlKind::Buttonset,
            "Display Footer Widgets Area",
            "Enable or disable the footer widgets area.",
        )
        .with_choices(display_choices())
        .sanitized_by(Sanitizer::Key)
        .with_default("default"),
    );
    fields.push(
        FieldDef::new(
            "ocean_display_footer_bottom",
            FOOTER,
            ControlKind::Buttonset,
            "Display Copyright Area",
            "Enable or disable the copyright area.",
        )
        .with_choices(display_choices())
        .sanitized_by(Sanitizer::Key)
        .with_default("default"),
    );
    fields.push(
        FieldDef::new(
            "ocean_custom_footer_template",
            FOOTER,
            ControlKind::Select,
            "Select Template",
            "Choose a template created in Theme Panel > My Library.",
        )
        .with_choices(Choices::lookup(LookupKind::LibraryTemplates))
        .sanitized_by(Sanitizer::Key),
    );

    fields
}

/// Fields of the Post section, only registered for the `post` content type.
pub fn post_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new(
            "ocean_post_oembed",
            POST,
            ControlKind::Text,
            "oEmbed URL",
            "Enter a URL that is compatible with the built-in oEmbed feature. This setting \
             is used for your video and audio post formats.",
        )
        .sanitized_by(Sanitizer::Text),
        FieldDef::new(
            "ocean_post_self_hosted_media",
            POST,
            ControlKind::Media,
            "Self Hosted",
            "Insert your self hosted video or audio url here.",
        )
        .sanitized_by(Sanitizer::Text),
        FieldDef::new(
            "ocean_post_video_embed",
            POST,
            ControlKind::Textarea,
            "Embed Code",
            "Insert your embed/iframe code. This setting is used for your video and audio \
             post formats.",
        )
        .sanitized_by(Sanitizer::Raw),
        FieldDef::new(
            "ocean_link_format",
            POST,
            ControlKind::Text,
            "Link",
            "Enter your external url. This setting is used for your link post formats.",
        )
        .sanitized_by(Sanitizer::Text),
        FieldDef::new(
            "ocean_link_format_target",
            POST,
            ControlKind::Buttonset,
            "Link Target",
            "Choose your target for the url. This setting is used for your link post formats.",
        )
        .with_choices(Choices::from_pairs([("self", "Self"), ("blank", "Blank")]))
        .sanitized_by(Sanitizer::Text)
        .with_default("self"),
        FieldDef::new(
            "ocean_quote_format",
            POST,
            ControlKind::Textarea,
            "Quote",
            "Enter your quote. This setting is used for your quote post formats.",
        )
        .sanitized_by(Sanitizer::RichText),
        FieldDef::new(
            "ocean_quote_format_link",
            POST,
            ControlKind::Buttonset,
            "Quote Link",
            "Choose your quote link. This setting is used for your quote post formats.",
        )
        .with_choices(Choices::from_pairs([("post", "Post"), ("none", "None")]))
        .sanitized_by(Sanitizer::Text)
        .with_default("post"),
    ]
}
