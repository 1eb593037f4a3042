//! About, team and contact sections.

use crate::domain::{
    page::{DemoPage, create_row, row},
    types::{LinkTarget::Self_, RowBackground::{self, Hover, Primary}},
    widgets::{divider, heading, image, link, links, text},
};

pub(super) fn about() -> DemoPage {
    DemoPage::new(
        "about/about.json",
        "about",
        "About IntraVox",
        vec![
            create_row(
                vec![
                    image("images/about-mission.jpg", "Our mission").at(1),
                    heading("About IntraVox", 1).at(2),
                    text("Building the future of collaborative intranets on Nextcloud").at(3),
                ],
                Primary,
                1,
            ),
            create_row(
                vec![
                    heading("Our Mission", 2).at_column(1, 1),
                    text("IntraVox was created to bring **SharePoint-style content management** to the open-source Nextcloud platform. We believe that every organization should have access to powerful intranet tools without vendor lock-in or excessive costs.").at_column(1, 2),
                    heading("Our Vision", 2).at_column(2, 1),
                    text("We envision a world where every organization can build **powerful, secure intranets** without compromising on privacy or paying excessive licensing fees. IntraVox makes this possible.").at_column(2, 2),
                ],
                RowBackground::None,
                2,
            ),
            row(vec![divider().at(1)]),
            create_row(
                vec![
                    heading("Simple Yet Powerful", 3).at_column(1, 1),
                    text("Easy enough for non-technical users, powerful enough for complex intranets").at_column(1, 2),
                    heading("Open Source", 3).at_column(2, 1),
                    text("Built on the AGPL license, free to use and modify").at_column(2, 2),
                    heading("Privacy First", 3).at_column(3, 1),
                    text("Your data stays on your servers, under your control").at_column(3, 2),
                ],
                Hover,
                3,
            ),
            row(vec![
                heading("Why Choose IntraVox?", 2).at(1),
                links(
                    vec![
                        link("Easy to Use", "#", "hand-okay", Self_),
                        link("Secure", "#", "shield-check", Self_),
                        link("Open Source", "#", "open-source-initiative", Self_),
                        link("Multi-Language", "#", "translate", Self_),
                        link("Responsive", "#", "responsive", Self_),
                        link("Collaborative", "#", "account-multiple", Self_),
                    ],
                    3,
                )
                .at(2),
            ]),
        ],
    )
}

pub(super) fn team() -> DemoPage {
    DemoPage::new(
        "team/team.json",
        "team",
        "Our Team",
        vec![
            create_row(
                vec![
                    image("images/team-collaboration.jpg", "Team collaboration").at(1),
                    heading("Our Team", 1).at(2),
                    text("Meet the people behind IntraVox").at(3),
                ],
                Primary,
                1,
            ),
            row(vec![
                heading("Who We Are", 2).at(1),
                text("We're a passionate team of developers, designers, and open-source enthusiasts dedicated to building better collaboration tools for everyone.").at(2),
                links(
                    vec![
                        link("Management", "#team/management", "account-tie", Self_),
                        link("Departments", "#team/departments", "office-building", Self_),
                    ],
                    2,
                )
                .at(3),
            ]),
        ],
    )
}

pub(super) fn management() -> DemoPage {
    DemoPage::new(
        "team/management/management.json",
        "management",
        "Management Team",
        vec![
            create_row(
                vec![
                    heading("Management Team", 1).at(1),
                    text("Our leadership team driving IntraVox forward").at(2),
                ],
                Primary,
                1,
            ),
            row(vec![
                heading("Leadership", 2).at(1),
                text("Our management team brings decades of experience in open-source software, enterprise collaboration, and product development.").at(2),
            ]),
        ],
    )
}

pub(super) fn departments() -> DemoPage {
    DemoPage::new(
        "team/departments/departments.json",
        "departments",
        "Our Departments",
        vec![
            create_row(
                vec![
                    heading("Our Departments", 1).at(1),
                    text("Discover the teams that make IntraVox possible").at(2),
                ],
                Primary,
                1,
            ),
            row(vec![
                links(
                    vec![
                        link("Development", "#", "code-tags", Self_),
                        link("Design", "#", "palette", Self_),
                        link("Support", "#", "lifebuoy", Self_),
                        link("Sales", "#", "currency-usd", Self_),
                    ],
                    4,
                )
                .at(1),
            ]),
        ],
    )
}

pub(super) fn careers() -> DemoPage {
    DemoPage::new(
        "careers/careers.json",
        "careers",
        "Careers",
        vec![
            create_row(
                vec![
                    image("images/careers.jpg", "Join our team").at(1),
                    heading("Join Our Team", 1).at(2),
                    text("Build the future of open-source collaboration with us").at(3),
                ],
                Primary,
                1,
            ),
            row(vec![
                heading("Why Work With Us?", 2).at(1),
                text("We're looking for talented individuals who share our passion for open source and believe in the power of collaborative software.").at(2),
            ]),
            create_row(
                vec![
                    heading("Remote-Friendly", 3).at_column(1, 1),
                    text("Work from anywhere in the world. We embrace remote work and async collaboration.").at_column(1, 2),
                    heading("Open Source", 3).at_column(2, 1),
                    text("Contribute to meaningful open-source projects that make a real difference.").at_column(2, 2),
                    heading("Growth", 3).at_column(3, 1),
                    text("Professional development opportunities and competitive compensation.").at_column(3, 2),
                ],
                Hover,
                3,
            ),
            row(vec![
                heading("Open Positions", 2).at(1),
                text("Check back soon for available positions or send us your resume at jobs@intravox.example").at(2),
            ]),
        ],
    )
}

pub(super) fn contact() -> DemoPage {
    DemoPage::new(
        "contact/contact.json",
        "contact",
        "Contact Us",
        vec![
            create_row(
                vec![
                    image("images/contact.jpg", "Contact us").at(1),
                    heading("Get in Touch", 1).at(2),
                    text("We'd love to hear from you").at(3),
                ],
                Primary,
                1,
            ),
            create_row(
                vec![
                    heading("Office", 2).at_column(1, 1),
                    text("**Address:**\nIntraVox HQ\nAmsterdam Science Park\n1098 XH Amsterdam\nNetherlands").at_column(1, 2),
                    heading("Get in Touch", 2).at_column(2, 1),
                    text("**Email:** info@intravox.example\n**Phone:** +31 (0) 20 123 4567\n**Support:** support@intravox.example").at_column(2, 2),
                ],
                RowBackground::None,
                2,
            ),
            create_row(
                vec![
                    heading("Business Hours", 2).at(1),
                    text("Monday - Friday: 9:00 AM - 5:00 PM (CET)\n\nFor urgent support inquiries, please use our 24/7 support portal.").at(2),
                ],
                Hover,
                1,
            ),
        ],
    )
}
