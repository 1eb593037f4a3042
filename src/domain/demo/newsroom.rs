//! News, events and press pages.

use crate::domain::{
    page::{DemoPage, create_row, row},
    types::{LinkTarget::Blank, RowBackground::{self, Hover, Primary}},
    widgets::{heading, image, link, links, text},
};

pub(super) fn news() -> DemoPage {
    DemoPage::new(
        "news/news.json",
        "news",
        "News",
        vec![
            create_row(
                vec![
                    image("images/news-press.jpg", "Latest news").at(1),
                    heading("Latest News", 1).at(2),
                    text("Stay informed about the latest developments").at(3),
                ],
                Primary,
                1,
            ),
            create_row(
                vec![
                    heading("IntraVox 1.0 Released", 3).at_column(1, 1),
                    text("**November 2025**\n\nWe're excited to announce the stable release of IntraVox 1.0! This major milestone brings enterprise-grade content management to Nextcloud with a beautiful, user-friendly interface.").at_column(1, 2),
                    heading("New Features in 0.4.5", 3).at_column(2, 1),
                    text("**November 2025**\n\nVisual folder distinction with 📷 emoji prefix for images folders. Multi-column layouts support. Enhanced mobile experience for editing pages.").at_column(2, 2),
                ],
                RowBackground::None,
                2,
            ),
            create_row(
                vec![
                    heading("Community Highlights", 3).at_column(1, 1),
                    text("**October 2025**\n\nThank you to our growing community of contributors! We've reached 1000+ downloads on the Nextcloud App Store.").at_column(1, 2),
                    heading("Beta Testing Success", 3).at_column(2, 1),
                    text("**September 2025**\n\nBeta testing phase completed with excellent feedback from early adopters. Ready for stable release!").at_column(2, 2),
                ],
                Hover,
                2,
            ),
        ],
    )
}

pub(super) fn events() -> DemoPage {
    DemoPage::new(
        "events/events.json",
        "events",
        "Events",
        vec![
            create_row(
                vec![
                    image("images/events.jpg", "Events").at(1),
                    heading("Upcoming Events", 1).at(2),
                    text("Join us at these upcoming events and webinars").at(3),
                ],
                Primary,
                1,
            ),
            create_row(
                vec![
                    heading("Nextcloud Conference", 3).at_column(1, 1),
                    text("**December 2025**\n\nBerlin, Germany\n\nJoin us at the annual Nextcloud Conference where we'll showcase IntraVox's latest features and roadmap.").at_column(1, 2),
                    heading("Open Source Summit", 3).at_column(2, 1),
                    text("**January 2026**\n\nAmsterdam, NL\n\nMeet the IntraVox team at the Open Source Summit and learn about building intranets.").at_column(2, 2),
                    heading("IntraVox Webinar", 3).at_column(3, 1),
                    text("**Monthly**\n\nOnline\n\nJoin our monthly webinars to learn tips and tricks for getting the most out of IntraVox.").at_column(3, 2),
                ],
                RowBackground::None,
                3,
            ),
            create_row(
                vec![
                    heading("Past Events", 2).at(1),
                    text("**IntraVox Launch Event** - November 2025\n\nThank you to everyone who joined our virtual launch event! Watch the recording on our YouTube channel.").at(2),
                ],
                Hover,
                1,
            ),
        ],
    )
}

pub(super) fn press() -> DemoPage {
    DemoPage::new(
        "press/press.json",
        "press",
        "Press Releases",
        vec![
            create_row(
                vec![
                    image("images/news-media.jpg", "Press releases").at(1),
                    heading("Press Releases", 1).at(2),
                    text("Official press releases and media resources").at(3),
                ],
                Primary,
                1,
            ),
            row(vec![
                heading("Latest Press Releases", 2).at(1),
                text("**IntraVox Announces Version 1.0** - November 2025\n\nIntraVox, the open-source intranet platform for Nextcloud, today announced the release of version 1.0, marking a major milestone in bringing enterprise-grade content management to the Nextcloud ecosystem.").at(2),
            ]),
            create_row(
                vec![
                    heading("Media Kit", 2).at(1),
                    text("Download our press kit including logos, screenshots, and brand guidelines.").at(2),
                    links(
                        vec![
                            link("Download Press Kit", "#", "download", Blank),
                            link("Brand Guidelines", "#", "palette", Blank),
                        ],
                        2,
                    )
                    .at(3),
                ],
                Hover,
                1,
            ),
        ],
    )
}
