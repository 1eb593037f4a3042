use crate::domain::{
    page::{DemoPage, create_row, row},
    types::{LinkTarget::Self_, RowBackground::{self, Hover, Primary}},
    widgets::{divider, heading, image, link, links, text},
};

pub(super) fn home() -> DemoPage {
    DemoPage::new(
        "home.json",
        "home",
        "Welcome to IntraVox",
        vec![
            create_row(
                vec![
                    image("images/team-hero.jpg", "The IntraVox team").at(1),
                    heading("Welcome to IntraVox", 1).at(2),
                    text("Your modern intranet platform built on Nextcloud").at(3),
                ],
                Primary,
                1,
            ),
            row(vec![
                heading("What is IntraVox?", 2).at(1),
                text("IntraVox is a powerful **intranet application** for Nextcloud that brings SharePoint-style content management to the open-source world.\n\n✓ Create beautiful pages with a visual editor\n✓ Organize content with multi-level navigation\n✓ Support for multiple languages\n✓ Secure team collaboration").at(2),
            ]),
            row(vec![
                image("images/features-showcase.jpg", "Feature showcase").at(1),
                heading("Built for Modern Teams", 2).at(2),
                text("IntraVox combines the power of **open-source** with enterprise-grade features. Create stunning pages, organize content effortlessly, and collaborate with your team in a secure environment.").at(3),
            ]),
            row(vec![divider().at(1)]),
            create_row(
                vec![
                    heading("Why Choose IntraVox?", 2).at(1),
                    text("Discover what makes IntraVox the perfect choice for your organization's intranet needs.").at(2),
                ],
                Hover,
                1,
            ),
            create_row(
                vec![
                    image("images/modern-workspace.jpg", "Modern digital workspace").at_column(1, 1),
                    heading("Modern & Intuitive", 2).at_column(1, 2),
                    text("A beautiful, user-friendly interface that your team will love. Built with modern web technologies for the best user experience.").at_column(1, 3),
                    image("images/secure-platform.jpg", "Secure collaboration platform").at_column(2, 1),
                    heading("Secure by Design", 2).at_column(2, 2),
                    text("Your data stays on your servers. Built on Nextcloud's proven security architecture with enterprise-grade protection.").at_column(2, 3),
                ],
                RowBackground::None,
                2,
            ),
            row(vec![divider().at(1)]),
            create_row(
                vec![
                    heading("Quick Links", 2).at(1),
                    links(
                        vec![
                            link("About Us", "#about", "information", Self_),
                            link("Our Team", "#team", "account-multiple", Self_),
                            link("Documentation", "#documentation", "book-open", Self_),
                            link("Contact", "#contact", "email", Self_),
                        ],
                        4,
                    )
                    .at(2),
                ],
                Hover,
                1,
            ),
            row(vec![
                image("images/collaboration.jpg", "Team collaboration").at(1),
                heading("Collaborate Seamlessly", 2).at(2),
                text("Work together with your team in real-time. Share knowledge, build beautiful intranets, and keep everyone connected with IntraVox.").at(3),
            ]),
            row(vec![
                image("images/open-source.jpg", "Open source community").at(1),
                heading("Open Source Freedom", 2).at(2),
                text("No vendor lock-in, no hidden costs. IntraVox is **100% open source** under the AGPL license, giving you complete control and freedom.").at(3),
            ]),
            row(vec![divider().at(1)]),
            row(vec![
                heading("Latest Updates", 2).at(1),
                text("Stay up to date with the latest news, events, and announcements from our organization.").at(2),
                links(
                    vec![
                        link("News", "#news", "newspaper", Self_),
                        link("Events", "#events", "calendar", Self_),
                        link("Press Releases", "#press", "bullhorn", Self_),
                    ],
                    3,
                )
                .at(3),
            ]),
        ],
    )
}
