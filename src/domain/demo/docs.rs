//! Documentation, downloads and support pages.

use crate::domain::{
    page::{DemoPage, create_row, row},
    types::{
        LinkTarget::{Blank, Self_},
        RowBackground::{self, Hover, Primary},
    },
    widgets::{heading, image, link, links, text},
};

pub(super) fn documentation() -> DemoPage {
    DemoPage::new(
        "documentation/documentation.json",
        "documentation",
        "Documentation",
        vec![
            create_row(
                vec![
                    image("images/documentation.jpg", "Documentation").at(1),
                    heading("Documentation", 1).at(2),
                    text("Everything you need to know about using IntraVox").at(3),
                ],
                Primary,
                1,
            ),
            row(vec![
                heading("Get Started", 2).at(1),
                links(
                    vec![
                        link("Getting Started", "#documentation/getting-started", "rocket-launch", Self_),
                        link("User Guide", "#documentation/user-guide", "book-open", Self_),
                        link("FAQ", "#documentation/faq", "help-circle", Self_),
                    ],
                    3,
                )
                .at(2),
            ]),
        ],
    )
}

pub(super) fn getting_started() -> DemoPage {
    DemoPage::new(
        "documentation/getting-started/getting-started.json",
        "getting-started",
        "Getting Started",
        vec![
            create_row(
                vec![
                    heading("Getting Started with IntraVox", 1).at(1),
                    text("Learn the basics in just a few minutes").at(2),
                ],
                Primary,
                1,
            ),
            row(vec![
                heading("Quick Start", 2).at(1),
                text("### Installation\n\n1. Install IntraVox from the Nextcloud App Store\n2. Enable the app in your Nextcloud instance\n3. Run the setup command: `occ intravox:setup`\n\n### Creating Your First Page\n\n1. Click the IntraVox icon in the top navigation\n2. Click 'New Page'\n3. Add widgets to build your page\n4. Save and publish!").at(2),
            ]),
        ],
    )
}

pub(super) fn user_guide() -> DemoPage {
    DemoPage::new(
        "documentation/user-guide/user-guide.json",
        "user-guide",
        "User Guide",
        vec![
            create_row(
                vec![
                    heading("User Guide", 1).at(1),
                    text("Comprehensive guide to all IntraVox features").at(2),
                ],
                Primary,
                1,
            ),
            row(vec![
                heading("Working with Pages", 2).at(1),
                text("### Page Editor\n\nThe IntraVox page editor lets you create professional-looking pages without any technical knowledge.\n\n### Available Widgets\n\n- **Text**: Rich text with Markdown support\n- **Heading**: H1-H6 headings\n- **Image**: Upload and display images\n- **Links**: Grid of clickable links with icons\n- **Divider**: Visual separators between sections").at(2),
            ]),
        ],
    )
}

pub(super) fn faq() -> DemoPage {
    DemoPage::new(
        "documentation/faq/faq.json",
        "faq",
        "Frequently Asked Questions",
        vec![
            create_row(
                vec![
                    heading("FAQ", 1).at(1),
                    text("Find answers to common questions").at(2),
                ],
                Primary,
                1,
            ),
            row(vec![
                heading("Common Questions", 2).at(1),
                text("**Q: Is IntraVox free?**\nA: Yes! IntraVox is open-source software licensed under AGPL.\n\n**Q: Does it work with Nextcloud Hub?**\nA: Yes, IntraVox is fully compatible with Nextcloud Hub.\n\n**Q: Can I use custom themes?**\nA: IntraVox automatically adapts to your Nextcloud theme.").at(2),
            ]),
        ],
    )
}

pub(super) fn downloads() -> DemoPage {
    DemoPage::new(
        "downloads/downloads.json",
        "downloads",
        "Downloads",
        vec![
            create_row(
                vec![
                    image("images/downloads.jpg", "Downloads").at(1),
                    heading("Downloads", 1).at(2),
                    text("Get the latest version of IntraVox").at(3),
                ],
                Primary,
                1,
            ),
            create_row(
                vec![
                    heading("Nextcloud App Store", 2).at_column(1, 1),
                    text("**Recommended**\n\nInstall IntraVox directly from your Nextcloud instance via the App Store. One-click installation with automatic updates.").at_column(1, 2),
                    links(
                        vec![link("Install from App Store", "https://apps.nextcloud.com", "download", Blank)],
                        1,
                    )
                    .at_column(1, 3),
                    heading("GitHub", 2).at_column(2, 1),
                    text("**For Developers**\n\nGet the source code, report issues, or contribute to the project on GitHub.").at_column(2, 2),
                    links(
                        vec![link("View on GitHub", "https://github.com", "github", Blank)],
                        1,
                    )
                    .at_column(2, 3),
                ],
                RowBackground::None,
                2,
            ),
            create_row(
                vec![
                    heading("Latest Release", 2).at(1),
                    text("**IntraVox 1.0.0** - November 2025\n\nStable release with full feature set. Compatible with Nextcloud 28+").at(2),
                ],
                Hover,
                1,
            ),
        ],
    )
}

pub(super) fn support() -> DemoPage {
    DemoPage::new(
        "support/support.json",
        "support",
        "Support",
        vec![
            create_row(
                vec![
                    image("images/support-help.jpg", "Support").at(1),
                    heading("Support", 1).at(2),
                    text("We're here to help").at(3),
                ],
                Primary,
                1,
            ),
            create_row(
                vec![
                    heading("Community Support", 2).at_column(1, 1),
                    text("**Free community support** through our forums and GitHub discussions. Get help from other IntraVox users and contributors.\n\n• Response time: 24-48 hours\n• Available 24/7\n• Community-driven").at_column(1, 2),
                    heading("Professional Support", 2).at_column(2, 1),
                    text("**Enterprise support** for organizations requiring guaranteed response times and dedicated assistance.\n\n• Response time: <4 hours\n• Direct email support\n• Custom development").at_column(2, 2),
                ],
                RowBackground::None,
                2,
            ),
            create_row(
                vec![
                    heading("Get Help", 2).at(1),
                    text("Choose your preferred support channel:").at(2),
                    links(
                        vec![
                            link("Documentation", "#documentation", "book-open", Self_),
                            link("Community Forum", "#", "forum", Blank),
                            link("GitHub Issues", "#", "bug", Blank),
                            link("Contact Us", "#contact", "email", Self_),
                        ],
                        4,
                    )
                    .at(3),
                ],
                Hover,
                1,
            ),
        ],
    )
}
