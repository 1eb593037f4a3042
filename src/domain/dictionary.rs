//! Dutch to English phrase table for demo content.
//!
//! Multi-line paragraphs are left out; they belong to pages this crate does
//! not generate. The tail of the table holds widget labels and image captions.
//! Entries are looked up longest first so that a sentence is replaced before
//! any shorter phrase inside it.

use std::sync::OnceLock;

pub type Phrase = (&'static str, &'static str);

const DUTCH_TO_ENGLISH: &[Phrase] = &[
    ("Pagina Layouts", "Page Layouts"),
    ("Flexibele layouts", "Flexible layouts"),
    ("Flexibele Pagina Layouts", "Flexible Page Layouts"),
    ("Creëer professionele pagina-indelingen met ons krachtige grid systeem. Van eenvoudige single-column tot complexe multi-column layouts.", "Create professional page layouts with our powerful grid system. From simple single-column to complex multi-column layouts."),
    ("1 Kolom Layout", "1 Column Layout"),
    ("2 Kolommen Layout", "2 Column Layout"),
    ("2 kolommen voorbeeld", "2 column example"),
    ("De 2-kolom layout verdeelt de ruimte gelijkmatig, waardoor je content en visuals mooi kunt combineren.", "The 2-column layout divides the space evenly, allowing you to beautifully combine content and visuals."),
    ("Eerste service met uitgebreide beschrijving en alle features.", "First service with detailed description and all features."),
    ("Tweede service met eigen unieke kenmerken en voordelen.", "Second service with its own unique characteristics and benefits."),
    ("Derde service die het aanbod completeert.", "Third service that completes the offering."),
    ("4+ Kolommen", "4+ Columns"),
    ("Voor feature grids, team overviewen en icon-based navigatie.", "For feature grids, team overviews and icon-based navigation."),
    ("Snelheid", "Speed"),
    ("Razendsnelle laadtijden", "Lightning-fast load times"),
    ("Veilig", "Secure"),
    ("Enterprise beveiliging", "Enterprise security"),
    ("Flexibel", "Flexible"),
    ("Volledig aanpasbaar", "Fully customizable"),
    ("Schaalbaar", "Scalable"),
    ("Groeit met u mee", "Grows with you"),
    ("Zijkolommen", "Side Columns"),
    ("Meer Layout Opties", "More Layout Options"),
    ("Alle beschikbare widgets", "All available widgets"),
    ("Menu configuratie", "Menu configuration"),
    ("Stap-voor-stap tutorials", "Step-by-step tutorials"),
    ("Overzicht alle functies", "Overview of all features"),
    ("Nextcloud wordt vertrouwd door **400.000+ servers** en **miljoenen gebruikers** wereldwijd, waaronder overheden, universiteiten en Fortune 500 bedrijven.", "Nextcloud is trusted by **400,000+ servers** and **millions of users** worldwide, including governments, universities and Fortune 500 companies."),
    ("IntraVox is een open source intranet applicatie voor Nextcloud. Het biedt SharePoint-achtige functionaliteit voor het maken van interne websites, pagina's en content management - volledig geïntegreerd met uw Nextcloud omgeving.", "IntraVox is an open source intranet application for Nextcloud. It offers SharePoint-like functionality for creating internal websites, pages and content management - fully integrated with your Nextcloud environment."),
    ("Yes! IntraVox is 100% open source en gratis te gebruiken onder de AGPL licentie. Er zijn geen verborgen kosten of premium features. Alle functionaliteit is available voor iedereen.", "Yes! IntraVox is 100% open source and free to use under the AGPL license. There are no hidden costs or premium features. All functionality is available to everyone."),
    ("IntraVox vereist Nextcloud 27 of hoger. We raden aan om altijd de nieuwste stabiele versie van Nextcloud te gebruiken voor de beste ervaring en beveiligingsupdates.", "IntraVox requires Nextcloud 27 or higher. We recommend always using the latest stable version of Nextcloud for the best experience and security updates."),
    ("Kan ik IntraVox aanpassen?", "Can I customize IntraVox?"),
    ("Maak uw eerste pagina", "Create your first page"),
    ("View onze video handleidingen voor een visuele uitleg van alle functies.", "View our video guides for a visual explanation of all features."),
    ("Kleurgebruik", "Color usage"),
    ("Alles wat u nodig heeft om IntraVox succesvol te gebruiken.", "Everything you need to successfully use IntraVox."),
    ("Ideaal voor uitgebreide navigatie met veel pagina's en categorieën. Toont alle items in een overviewelijk raster.", "Ideal for extensive navigation with many pages and categories. Shows all items in a clear grid."),
    ("Zoekfunctie", "Search function"),
    ("Doorzoek alle pagina's", "Search all pages"),
    ("Configureer krachtige navigatiesystemen voor uw intranet. Kies tussen mega menu's en dropdown menu's voor de perfecte gebruikerservaring.", "Configure powerful navigation systems for your intranet. Choose between mega menus and dropdown menus for the perfect user experience."),
    ("Discover alle beschikbare widgets om uw pagina's tot leven te brengen. Van tekst tot afbeeldingen, van links tot interactieve elementen.", "Discover all available widgets to bring your pages to life. From text to images, from links to interactive elements."),
    ("Tips voor betere pagina's", "Tips for better pages"),
    ("Overzicht alle afdelingen", "Overview of all departments"),
    ("De IT-afdeling ondersteunt alle technologische aspecten van onze organisatie. Van helpdesk tot infrastructuur, wij staan voor u klaar.", "The IT department supports all technological aspects of our organization. From helpdesk to infrastructure, we are here for you."),
    ("Nextcloud Gebruikers Wereldwijd", "Nextcloud Users Worldwide"),
    ("Gebruikers", "Users"),
    ("Stap 4: Gebruikers Toevoegen", "Step 4: Add Users"),
    ("Widgets Toevoegen", "Adding Widgets"),
    ("Widget Dupliceren", "Duplicate Widget"),
    ("Discover de verschillende afdelingen binnen onze organisatie en hun specialisaties.", "Discover the different departments within our organization and their specializations."),
    ("**Tip:** Sleep widgets naar de gewenste positie voor perfecte layouts.", "**Tip:** Drag widgets to the desired position for perfect layouts."),
    ("Creëer navigeerbare link collecties met iconen en beschrijvingen.", "Create navigable link collections with icons and descriptions."),
    ("Alle belangrijke regels en richtlijnen voor medewerkers van IntraVox.", "All important rules and guidelines for IntraVox employees."),
    ("IntraVox - Uw Moderne Intranet Oplossing", "IntraVox - Your Modern Intranet Solution"),
    ("**Transformeer uw organisatie** met een krachtig intranet platform gebouwd op Nextcloud. Open source, veilig en volledig aanpasbaar.", "**Transform your organization** with a powerful intranet platform built on Nextcloud. Open source, secure and fully customizable."),
    ("Wat is IntraVox?", "What is IntraVox?"),
    ("IntraVox is een **moderne intranet applicatie** voor Nextcloud die SharePoint-achtige content management naar de open-source wereld brengt.", "IntraVox is a **modern intranet application** for Nextcloud that brings SharePoint-like content management to the open-source world."),
    ("**Waarom kiezen voor IntraVox?**", "**Why choose IntraVox?**"),
    ("Creëer prachtige pagina's met een visuele editor", "Create beautiful pages with a visual editor"),
    ("Organiseer content met multi-level navigatie", "Organize content with multi-level navigation"),
    ("Ondersteuning voor meerdere talen", "Support for multiple languages"),
    ("Veilige team samenwerking", "Secure team collaboration"),
    ("Volledige integratie met Nextcloud", "Full integration with Nextcloud"),
    ("Krachtige Functies", "Powerful Features"),
    ("Maak professionele pagina's met tekst, afbeeldingen, links en meer. De drag-and-drop editor maakt het eenvoudig om content te beheren.", "Create professional pages with text, images, links and more. The drag-and-drop editor makes it easy to manage content."),
    ("Naadloze Samenwerking", "Seamless Collaboration"),
    ("Werk samen met uw team in real-time. Deel kennis, bouw mooie intranets en houd iedereen verbonden.", "Work together with your team in real-time. Share knowledge, build beautiful intranets and keep everyone connected."),
    ("Geen vendor lock-in, geen verborgen kosten. IntraVox is volledig open source onder de AGPL licentie.", "No vendor lock-in, no hidden costs. IntraVox is fully open source under the AGPL license."),
    ("Snelle Links", "Quick Links"),
    ("Ontdek onze missie en visie", "Discover our mission and vision"),
    ("Bekijk alle mogelijkheden", "View all possibilities"),
    ("Leer meer over het platform", "Learn more about the platform"),
    ("Neem contact met ons op", "Contact us"),
    ("Modern & Intuïtief", "Modern & Intuitive"),
    ("Een prachtige, gebruiksvriendelijke interface waar uw team van zal houden. Gebouwd met moderne webtechnologieën voor de beste gebruikerservaring.", "A beautiful, user-friendly interface your team will love. Built with modern web technologies for the best user experience."),
    ("**Kenmerken:**", "**Features:**"),
    ("Responsive design voor alle apparaten", "Responsive design for all devices"),
    ("Intuïtieve drag-and-drop editor", "Intuitive drag-and-drop editor"),
    ("Veilig by Design", "Secure by Design"),
    ("Uw data blijft op uw eigen servers. Gebouwd op Nextcloud's bewezen beveiligingsarchitectuur met enterprise-grade bescherming.", "Your data stays on your own servers. Built on Nextcloud's proven security architecture with enterprise-grade protection."),
    ("**Beveiliging:**", "**Security:**"),
    ("End-to-end encryptie", "End-to-end encryption"),
    ("Externe Bronnen", "External Resources"),
    ("Ontdek meer over Nextcloud en de open source community:", "Discover more about Nextcloud and the open source community:"),
    ("Officiële Nextcloud website", "Official Nextcloud website"),
    ("Bekijk de broncode", "View the source code"),
    ("Nextcloud handleidingen", "Nextcloud guides"),
    ("Nieuwste Updates", "Latest Updates"),
    ("Blijf op de hoogte van het laatste nieuws, evenementen en aankondigingen van onze organisatie.", "Stay up to date with the latest news, events and announcements from our organization."),
    ("Laatste updates en aankondigingen", "Latest updates and announcements"),
    ("Informatie per afdeling", "Information per department"),
    ("Snel Navigeren", "Quick Navigation"),
    ("Over Ons", "About Us"),
    ("Hulp Nodig?", "Need Help?"),
    ("Onze support is beschikbaar op werkdagen van 9:00 - 17:00", "Our support is available on weekdays from 9:00 - 17:00"),
    ("Team samenwerking met IntraVox", "Team collaboration with IntraVox"),
    ("Nextcloud - Het Fundament van IntraVox", "Nextcloud - The Foundation of IntraVox"),
    ("IntraVox is gebouwd op Nextcloud, het toonaangevende open source platform voor veilige samenwerking.", "IntraVox is built on Nextcloud, the leading open source platform for secure collaboration."),
    ("Wat is Nextcloud?", "What is Nextcloud?"),
    ("Nextcloud is een **self-hosted productiviteitsplatform** dat de meest populaire cloud functionaliteiten combineert:", "Nextcloud is a **self-hosted productivity platform** that combines the most popular cloud functionalities:"),
    ("**Bestandssynchronisatie** - Sync uw bestanden tussen alle apparaten", "**File synchronization** - Sync your files across all devices"),
    ("**Delen** - Deel bestanden veilig binnen en buiten uw organisatie", "**Sharing** - Share files securely within and outside your organization"),
    ("**Samenwerking** - Real-time document bewerking", "**Collaboration** - Real-time document editing"),
    ("**Communicatie** - Chat, videobellen en agenda's", "**Communication** - Chat, video calls and calendars"),
    ("**Extensies** - Honderden apps in de App Store", "**Extensions** - Hundreds of apps in the App Store"),
    ("Data Soevereiniteit", "Data Sovereignty"),
    ("Uw data blijft op **uw servers**. Geen Amerikaanse cloud providers, volledige controle over waar uw gegevens worden opgeslagen.", "Your data stays on **your servers**. No American cloud providers, full control over where your data is stored."),
    ("Gebruikt door **overheden**, **universiteiten** en **bedrijven** wereldwijd. Schaalbaar van 10 tot 100.000+ gebruikers.", "Used by **governments**, **universities** and **companies** worldwide. Scalable from 10 to 100,000+ users."),
    ("Volledig **AVG/GDPR compliant**. Ideaal voor Europese organisaties die waarde hechten aan privacy en compliance.", "Fully **GDPR compliant**. Ideal for European organizations that value privacy and compliance."),
    ("Nextcloud Hub integreert alle tools die uw team nodig heeft:", "Nextcloud Hub integrates all the tools your team needs:"),
    ("**Files** - Bestanden opslaan en delen", "**Files** - Store and share files"),
    ("**Talk** - Videovergaderingen en chat", "**Talk** - Video meetings and chat"),
    ("**Groupware** - Agenda, mail en contacten", "**Groupware** - Calendar, mail and contacts"),
    ("**Office** - Document bewerking", "**Office** - Document editing"),
    ("App Ecosysteem", "App Ecosystem"),
    ("De Nextcloud App Store bevat honderden extensies:", "The Nextcloud App Store contains hundreds of extensions:"),
    ("**IntraVox** - Uw intranet oplossing", "**IntraVox** - Your intranet solution"),
    ("**Deck** - Kanban projectborden", "**Deck** - Kanban project boards"),
    ("**Forms** - Online formulieren", "**Forms** - Online forms"),
    ("**Polls** - Stemmingen en enquêtes", "**Polls** - Votes and surveys"),
    ("Nextcloud wordt ondersteund door een wereldwijd netwerk van partners die implementatie, hosting en support bieden. Wilt u Nextcloud implementeren? Neem contact met ons op voor advies.", "Nextcloud is supported by a worldwide network of partners offering implementation, hosting and support. Want to implement Nextcloud? Contact us for advice."),
    ("Evenementen & Webinars", "Events & Webinars"),
    ("Mis geen enkel evenement! Van interne workshops tot externe conferenties - blijf verbonden met de community.", "Don't miss any event! From internal workshops to external conferences - stay connected with the community."),
    ("Aankomende Evenementen", "Upcoming Events"),
    ("Webinar: IntraVox voor Beginners", "Webinar: IntraVox for Beginners"),
    ("**Datum:** 15 december 2024", "**Date:** December 15, 2024"),
    ("**Tijd:** 14:00 - 15:30", "**Time:** 2:00 PM - 3:30 PM"),
    ("**Locatie:** Online (Zoom)", "**Location:** Online (Zoom)"),
    ("Leer de basis van IntraVox in 90 minuten. Perfect voor nieuwe gebruikers die snel productief willen worden.", "Learn the basics of IntraVox in 90 minutes. Perfect for new users who want to become productive quickly."),
    ("Workshop: Geavanceerde Layouts", "Workshop: Advanced Layouts"),
    ("**Datum:** 20 december 2024", "**Date:** December 20, 2024"),
    ("**Tijd:** 10:00 - 12:00", "**Time:** 10:00 AM - 12:00 PM"),
    ("**Locatie:** Kantoor Amsterdam", "**Location:** Amsterdam Office"),
    ("Duik dieper in layout mogelijkheden, zijkolommen en achtergrondkleuren voor professionele pagina's.", "Dive deeper into layout options, side columns and background colors for professional pages."),
    ("Evenementen Kalender", "Events Calendar"),
    ("Afgelopen Evenementen", "Past Events"),
    ("| Datum | Evenement | Opname |", "| Date | Event | Recording |"),
    ("| Nov 2024 | Webinar: Dark Mode | Beschikbaar |", "| Nov 2024 | Webinar: Dark Mode | Available |"),
    ("| Okt 2024 | Workshop: Multi-taal | Beschikbaar |", "| Oct 2024 | Workshop: Multi-language | Available |"),
    ("| Sep 2024 | Lancering 0.4.0 | Beschikbaar |", "| Sep 2024 | Launch 0.4.0 | Available |"),
    ("| Aug 2024 | Zomer BBQ | - |", "| Aug 2024 | Summer BBQ | - |"),
    ("Gerelateerd", "Related"),
    ("Volgende Event", "Next Event"),
    ("15 december 2024", "December 15, 2024"),
    ("14:00 - 15:30", "2:00 PM - 3:30 PM"),
    ("Nieuwsbrief", "Newsletter"),
    ("Ontvang event updates in uw inbox.", "Receive event updates in your inbox."),
    ("Blijf op de hoogte van de nieuwste features en verbeteringen. Elke maand brengen we updates die uw ervaring verbeteren.", "Stay up to date with the latest features and improvements. Every month we release updates that improve your experience."),
    ("Nieuw: Donker thema voor IntraVox! Volgt automatisch uw systeemvoorkeuren of stel handmatig in.", "New: Dark theme for IntraVox! Automatically follows your system preferences or set manually."),
    ("Sneller Zoeken", "Faster Search"),
    ("Zoekresultaten worden nu 10x sneller geladen dankzij onze nieuwe index engine.", "Search results now load 10x faster thanks to our new index engine."),
    ("Mobiel Friendly", "Mobile Friendly"),
    ("Responsive design verbeterd voor tablets en smartphones. Bewerk pagina's onderweg!", "Responsive design improved for tablets and smartphones. Edit pages on the go!"),
    ("Oktober 2024", "October 2024"),
    ("Multi-taal Ondersteuning", "Multi-language Support"),
    ("Beheer content in meerdere talen vanuit één dashboard. Automatische taaldetectie voor bezoekers.", "Manage content in multiple languages from one dashboard. Automatic language detection for visitors."),
    ("**Ondersteunde talen:**", "**Supported languages:**"),
    ("- Nederlands", "- Dutch"),
    ("- Engels", "- English"),
    ("- Duits", "- German"),
    ("- Frans", "- French"),
    ("- Spaans", "- Spanish"),
    ("Verbeterde Editor", "Improved Editor"),
    ("De drag-and-drop editor is volledig vernieuwd:", "The drag-and-drop editor has been completely redesigned:"),
    ("- Undo/redo ondersteuning", "- Undo/redo support"),
    ("- Auto-save functie", "- Auto-save function"),
    ("- Verbeterde prestaties", "- Improved performance"),
    ("Changelog Archief", "Changelog Archive"),
    ("| Versie | Datum | Highlights |", "| Version | Date | Highlights |"),
    ("| 0.5.0 | Nov 2024 | Dark mode, sneller zoeken |", "| 0.5.0 | Nov 2024 | Dark mode, faster search |"),
    ("| 0.4.5 | Okt 2024 | Multi-taal, nieuwe editor |", "| 0.4.5 | Oct 2024 | Multi-language, new editor |"),
    ("Meer Nieuws", "More News"),
    ("Nieuws & Updates", "News & Updates"),
    ("Blijf op de hoogte van de laatste ontwikkelingen bij IntraVox en Nextcloud.", "Stay up to date with the latest developments at IntraVox and Nextcloud."),
    ("Laatste Nieuws", "Latest News"),
    ("IntraVox v1.0 Gelanceerd!", "IntraVox v1.0 Launched!"),
    ("**29 november 2024** - We zijn verheugd om de eerste stabiele versie van IntraVox aan te kondigen! Na maanden van ontwikkeling en testen is IntraVox nu beschikbaar voor alle Nextcloud gebruikers.", "**November 29, 2024** - We are excited to announce the first stable version of IntraVox! After months of development and testing, IntraVox is now available for all Nextcloud users."),
    ("- Visuele pagina editor met drag-and-drop", "- Visual page editor with drag-and-drop"),
    ("- Ondersteuning voor meerdere talen", "- Support for multiple languages"),
    ("- Mega menu en dropdown navigatie", "- Mega menu and dropdown navigation"),
    ("- Integratie met Nextcloud Group Folders", "- Integration with Nextcloud Group Folders"),
    ("**15 oktober 2024** - IntraVox was aanwezig op de Nextcloud Conference in Berlijn. We hebben een live demo gegeven van de nieuwste functies en waardevolle feedback ontvangen van de community.", "**October 15, 2024** - IntraVox was present at the Nextcloud Conference in Berlin. We gave a live demo of the latest features and received valuable feedback from the community."),
    ("[Bekijk de presentatie slides](https://nextcloud.com/conf/)", "[View the presentation slides](https://nextcloud.com/conf/)"),
    ("Beta Programma Gesloten", "Beta Program Closed"),
    ("**1 september 2024** - Ons beta programma is succesvol afgerond met meer dan 50 organisaties die IntraVox hebben getest. Bedankt aan alle beta testers voor hun waardevolle feedback!", "**September 1, 2024** - Our beta program has been successfully completed with more than 50 organizations that tested IntraVox. Thanks to all beta testers for their valuable feedback!"),
    ("**Datum:** 15 december 2024\\n**Tijd:** 14:00 - 15:00 CET", "**Date:** December 15, 2024\\n**Time:** 2:00 PM - 3:00 PM CET"),
    ("Een introductie tot IntraVox voor nieuwe gebruikers. Leer de basis en stel vragen aan het development team.", "An introduction to IntraVox for new users. Learn the basics and ask questions to the development team."),
    ("**Datum:** 1-2 februari 2025\\n**Locatie:** Brussel, België", "**Date:** February 1-2, 2025\\n**Location:** Brussels, Belgium"),
    ("Bezoek ons op FOSDEM! We zijn aanwezig in de Nextcloud devroom met een presentatie over IntraVox.", "Visit us at FOSDEM! We will be present in the Nextcloud devroom with a presentation about IntraVox."),
    ("Blijf Op De Hoogte", "Stay Informed"),
    ("Wij staan klaar om uw vragen te beantwoorden en u te helpen met IntraVox.", "We are ready to answer your questions and help you with IntraVox."),
    ("Neem Contact Op", "Get In Touch"),
    ("Heeft u vragen over IntraVox? Wilt u een demo? Of heeft u technische ondersteuning nodig?", "Do you have questions about IntraVox? Would you like a demo? Or do you need technical support?"),
    ("**E-mail:** info@intravox.nl", "**Email:** info@intravox.nl"),
    ("**Telefoon:** +31 (0)20 123 4567", "**Phone:** +31 (0)20 123 4567"),
    ("**Openingstijden:**", "**Opening hours:**"),
    ("Maandag - Vrijdag: 09:00 - 17:00 CET", "Monday - Friday: 09:00 - 17:00 CET"),
    ("Locatie", "Location"),
    ("Nederland", "The Netherlands"),
    ("*Makkelijk bereikbaar met OV*", "*Easy to reach by public transport*"),
    ("Station Amsterdam Science Park: 5 min lopen", "Amsterdam Science Park station: 5 min walk"),
    ("Onze support team staat voor u klaar.", "Our support team is ready for you."),
    ("Contact Opties", "Contact Options"),
    ("Demo Aanvragen", "Request Demo"),
    ("Wilt u IntraVox in actie zien? Vraag een **gratis demo** aan!", "Would you like to see IntraVox in action? Request a **free demo**!"),
    ("Onze product specialisten nemen binnen 24 uur contact met u op om een demo in te plannen. Tijdens de demo laten we u zien hoe IntraVox uw interne communicatie kan verbeteren.", "Our product specialists will contact you within 24 hours to schedule a demo. During the demo, we will show you how IntraVox can improve your internal communication."),
    ("**Wat u kunt verwachten:**", "**What you can expect:**"),
    ("- Persoonlijke rondleiding door IntraVox", "- Personal tour of IntraVox"),
    ("- Beantwoording van al uw vragen", "- Answers to all your questions"),
    ("- Advies voor uw specifieke situatie", "- Advice for your specific situation"),
    ("- Geen verplichtingen", "- No obligations"),
    ("Volg Ons", "Follow Us"),
    ("© 2025 IntraVox - [Contact](#) | [Documentatie](#) | [Support](#)", "© 2025 IntraVox - [Contact](#) | [Documentation](#) | [Support](#)"),
    ("Prijzen & Pakketten", "Pricing & Packages"),
    ("IntraVox is **100% gratis en open source**. Geen verborgen kosten, geen beperkingen.", "IntraVox is **100% free and open source**. No hidden costs, no limitations."),
    ("Open Source = Gratis", "Open Source = Free"),
    ("IntraVox is volledig **open source** onder de AGPL v3 licentie. Dit betekent:", "IntraVox is fully **open source** under the AGPL v3 license. This means:"),
    ("**Gratis te downloaden** en te gebruiken", "**Free to download** and use"),
    ("**Geen gebruikerslimiet** - onbeperkt aantal gebruikers", "**No user limit** - unlimited users"),
    ("**Alle functies inbegrepen** - geen premium tier", "**All features included** - no premium tier"),
    ("**Volledige broncode** beschikbaar op GitHub", "**Full source code** available on GitHub"),
    ("**Gratis**", "**Free**"),
    ("- Alle IntraVox functies", "- All IntraVox features"),
    ("- Documentatie", "- Documentation"),
    ("- Forum toegang", "- Forum access"),
    ("**Op aanvraag**", "**On request**"),
    ("- Prioriteit support", "- Priority support"),
    ("- Training sessies", "- Training sessions"),
    ("- Implementatie hulp", "- Implementation help"),
    ("- Custom ontwikkeling", "- Custom development"),
    ("- SLA garantie", "- SLA guarantee"),
    ("**Op maat**", "**Custom**"),
    ("- On-premise installatie", "- On-premise installation"),
    ("- 24/7 support optie", "- 24/7 support option"),
    ("Vergelijk met Alternatieven", "Compare with Alternatives"),
    ("| Licentiekosten | Gratis | €4-23/gebruiker/maand | €5-15/gebruiker/maand |", "| License costs | Free | €4-23/user/month | €5-15/user/month |"),
    ("| Hosting | Self-hosted | Cloud of On-premise | Cloud of On-premise |", "| Hosting | Self-hosted | Cloud or On-premise | Cloud or On-premise |"),
    ("| Vendor Lock-in | Nee | Ja | Ja |", "| Vendor Lock-in | No | Yes | Yes |"),
    ("| Open Source | Ja | Nee | Nee |", "| Open Source | Yes | No | No |"),
    ("| 100 gebruikers/jaar | €0 | €4.800 - €27.600 | €6.000 - €18.000 |", "| 100 users/year | €0 | €4,800 - €27,600 | €6,000 - €18,000 |"),
    ("Hosting Opties", "Hosting Options"),
    ("Nextcloud (en dus IntraVox) kan op verschillende manieren worden gehost:", "Nextcloud (and thus IntraVox) can be hosted in different ways:"),
    ("IntraVox Functies", "IntraVox Features"),
    ("Ontdek de krachtige mogelijkheden van IntraVox voor uw organisatie.", "Discover the powerful capabilities of IntraVox for your organization."),
    ("Pagina Editor", "Page Editor"),
    ("De visuele editor maakt het eenvoudig om professionele pagina's te maken zonder technische kennis.", "The visual editor makes it easy to create professional pages without technical knowledge."),
    ("Tekst Widget", "Text Widget"),
    ("Voeg rijke tekst toe met **Markdown** ondersteuning:", "Add rich text with **Markdown** support:"),
    ("- Vetgedrukt en cursief", "- Bold and italic"),
    ("- Lijsten en opsommingen", "- Lists and bullet points"),
    ("- Links en afbeeldingen", "- Links and images"),
    ("- Tabellen", "- Tables"),
    ("Afbeelding Widget", "Image Widget"),
    ("Upload en toon afbeeldingen:", "Upload and display images:"),
    ("- Automatische optimalisatie", "- Automatic optimization"),
    ("- Alt-tekst voor toegankelijkheid", "- Alt text for accessibility"),
    ("- Responsive weergave", "- Responsive display"),
    ("- Diverse formaten", "- Various formats"),
    ("Creëer navigatie-elementen:", "Create navigation elements:"),
    ("- Interne paginalinks", "- Internal page links"),
    ("- Externe URLs", "- External URLs"),
    ("- Pictogrammen", "- Icons"),
    ("Flexibele Layouts", "Flexible Layouts"),
    ("Ontwerp uw pagina's met maximale flexibiliteit.", "Design your pages with maximum flexibility."),
    ("Kolom Layouts", "Column Layouts"),
    ("Verdeel content over 1-4 kolommen:", "Divide content across 1-4 columns:"),
    ("- Automatische responsive aanpassing", "- Automatic responsive adjustment"),
    ("- Gelijke of aangepaste breedtes", "- Equal or custom widths"),
    ("- Achtergrondkleuren per rij", "- Background colors per row"),
    ("Voeg optionele zijkolommen toe:", "Add optional side columns:"),
    ("- Links en/of rechts", "- Left and/or right"),
    ("- Vaste breedte", "- Fixed width"),
    ("- Eigen widgets", "- Custom widgets"),
    ("- Ideaal voor navigatie", "- Ideal for navigation"),
    ("Structureer uw pagina met scheidingslijnen:", "Structure your page with dividing lines:"),
    ("- Verschillende stijlen", "- Different styles"),
    ("- Aanpasbare kleur", "- Customizable color"),
    ("- Variabele hoogte", "- Variable height"),
    ("Kies uit twee navigatiestijlen voor uw intranet.", "Choose from two navigation styles for your intranet."),
    ("Klassieke dropdown navigatie:", "Classic dropdown navigation:"),
    ("- Tot 3 niveaus diep", "- Up to 3 levels deep"),
    ("- Hover of click activatie", "- Hover or click activation"),
    ("- Compact en overzichtelijk", "- Compact and clear"),
    ("Uitgebreide mega menu navigatie:", "Extended mega menu navigation:"),
    ("- Alle opties zichtbaar", "- All options visible"),
    ("- Groepeer per categorie", "- Group by category"),
    ("- Ideaal voor grote sites", "- Ideal for large sites"),
    ("Navigatie Beheer", "Navigation Management"),
    ("Beheer eenvoudig de navigatiestructuur met onze drag-and-drop editor. Voeg pagina's toe, herorden items en maak geneste menu's.", "Easily manage the navigation structure with our drag-and-drop editor. Add pages, reorder items and create nested menus."),
    ("Welkom bij de Afdelingen", "Welcome to the Departments"),
    ("Vind informatie per afdeling. Klik op een afdeling om meer te weten.", "Find information per department. Click on a department to learn more."),
    ("Kies een afdeling", "Choose a department"),
    ("Creatieve oplossingen", "Creative solutions"),
    ("Klantrelaties", "Customer relations"),
    ("Personeelszaken", "Personnel matters"),
    ("Technische ondersteuning", "Technical support"),
    ("Welkom bij IT", "Welcome to IT"),
    ("Technische ondersteuning voor alle medewerkers. We staan voor je klaar!", "Technical support for all employees. We are here for you!"),
    ("Problemen of vragen? Maak een ticket aan.", "Problems or questions? Create a ticket."),
    ("Systemen", "Systems"),
    ("Overzicht van alle software en tools.", "Overview of all software and tools."),
    ("Richtlijnen voor veilig werken.", "Guidelines for working safely."),
    ("IT Support Overzicht", "IT Support Overview"),
    ("Wij helpen u met al uw technische vragen en problemen.", "We help you with all your technical questions and problems."),
    ("Hoe kunnen we helpen?", "How can we help?"),
    ("Contact opnemen", "Get in touch"),
    ("Werkdagen 9:00-17:00", "Weekdays 9:00-17:00"),
    ("Alleen bij spoed", "Emergencies only"),
    ("Uw IT verzoek wordt zo snel mogelijk behandeld.", "Your IT request will be processed as soon as possible."),
    ("Gemiddelde responstijd", "Average response time"),
    ("Probeer eerst zelf", "Try yourself first"),
    ("Bekijk de FAQ of zoek in de kennisbank voor snelle oplossingen.", "Check the FAQ or search the knowledge base for quick solutions."),
    ("Terug naar IT", "Back to IT"),
    ("IT overzicht", "IT overview"),
    ("Welkom bij de IT Helpdesk", "Welcome to the IT Helpdesk"),
    ("Technische ondersteuning voor alle medewerkers bij IntraVox.", "Technical support for all employees at IntraVox."),
    ("Contact Opnemen", "Get In Touch"),
    ("Maak een ticket aan via het support portaal of mail naar support@intravox.io. We reageren binnen 4 uur op werkdagen.", "Create a ticket via the support portal or email support@intravox.io. We respond within 4 hours on working days."),
    ("Zelfservice", "Self-Service"),
    ("Veelvoorkomende problemen kunt u zelf oplossen via onze handleidingen en FAQ.", "Common problems can be solved yourself via our guides and FAQ."),
    ("Openingstijden", "Opening Hours"),
    ("Ma-Vr: 9:00-17:00", "Mon-Fri: 9:00-17:00"),
    ("Weekend: Alleen spoed", "Weekend: Emergencies only"),
    ("Systemen & Tools", "Systems & Tools"),
    ("Overzicht van alle software en systemen die we gebruiken bij IntraVox.", "Overview of all software and systems we use at IntraVox."),
    ("Communicatie Tools", "Communication Tools"),
    ("**Nextcloud Talk** - Videovergaderingen en chat\\n**E-mail** - Microsoft 365\\n**Slack** - Team communicatie", "**Nextcloud Talk** - Video meetings and chat\\n**Email** - Microsoft 365\\n**Slack** - Team communication"),
    ("Productiviteit", "Productivity"),
    ("**Nextcloud Files** - Bestandsopslag\\n**Nextcloud Office** - Documenten bewerken\\n**Calendar** - Agenda beheer", "**Nextcloud Files** - File storage\\n**Nextcloud Office** - Document editing\\n**Calendar** - Calendar management"),
    ("Ontwikkeling", "Development"),
    ("**GitHub** - Broncode beheer\\n**VS Code** - Code editor\\n**Docker** - Containers", "**GitHub** - Source code management\\n**VS Code** - Code editor\\n**Docker** - Containers"),
    ("Toegang Aanvragen", "Request Access"),
    ("Nieuwe toegang nodig? Dien een IT ticket in met:\\n- Welk systeem\\n- Waarom toegang nodig\\n- Goedkeuring van manager", "Need new access? Submit an IT ticket with:\\n- Which system\\n- Why access is needed\\n- Manager approval"),
    ("Richtlijnen voor veilig werken en bescherming van bedrijfsgegevens.", "Guidelines for safe working and protection of company data."),
    ("Wachtwoorden", "Passwords"),
    ("**Vereisten:**\\n\\n- Minimaal 12 karakters\\n- Mix van letters, cijfers, symbolen\\n- Uniek per applicatie\\n- Wijzig elke 90 dagen\\n\\n*Gebruik een password manager!*", "**Requirements:**\\n\\n- Minimum 12 characters\\n- Mix of letters, numbers, symbols\\n- Unique per application\\n- Change every 90 days\\n\\n*Use a password manager!*"),
    ("2FA Authenticatie", "2FA Authentication"),
    ("**Verplicht voor:**\\n\\n- Nextcloud\\n- E-mail\\n- VPN\\n- Admin accounts\\n\\n*Setup via de IT Helpdesk*", "**Required for:**\\n\\n- Nextcloud\\n- Email\\n- VPN\\n- Admin accounts\\n\\n*Setup via IT Helpdesk*"),
    ("**Let op verdachte e-mails!**\\n\\nKlik NOOIT op links in onverwachte e-mails. Twijfel je? Meld het bij IT Security: security@intravox.io", "**Watch out for suspicious emails!**\\n\\nNEVER click on links in unexpected emails. In doubt? Report it to IT Security: security@intravox.io"),
    ("- Vergrendel je scherm (Win+L)\\n- Geen wachtwoorden op papier\\n- Gevoelige docs in de kluis\\n- Ruim je bureau op", "- Lock your screen (Win+L)\\n- No passwords on paper\\n- Sensitive docs in the vault\\n- Clean up your desk"),
    ("Incident Melden", "Report Incident"),
    ("Beveiligingsincident?\\n\\n**Meld direct bij:**\\nsecurity@intravox.io\\n\\nof bel: +31 20 123 4911", "Security incident?\\n\\n**Report directly to:**\\nsecurity@intravox.io\\n\\nor call: +31 20 123 4911"),
    ("Welkom bij HR", "Welcome to HR"),
    ("Alles over personeelszaken en arbeidsvoorwaarden bij IntraVox.", "Everything about personnel matters and employment conditions at IntraVox."),
    ("Openstaande posities", "Open positions"),
    ("Bekijk onze vacatures en solliciteer direct.", "View our vacancies and apply directly."),
    ("Nieuwe medewerker?", "New employee?"),
    ("Alles wat je moet weten voor een vliegende start.", "Everything you need for a flying start."),
    ("Bedrijfsbeleid", "Company Policy"),
    ("Regels, richtlijnen en belangrijke documenten.", "Rules, guidelines and important documents."),
    ("Vragen? Neem contact op met HR:\\n\\n**E-mail:** hr@intravox.io\\n**Telefoon:** +31 20 123 4568\\n\\nSpreekuur: Maandag en Woensdag 10:00-12:00", "Questions? Contact HR:\\n\\n**Email:** hr@intravox.io\\n**Phone:** +31 20 123 4568\\n\\nOffice hours: Monday and Wednesday 10:00-12:00"),
    ("Terug naar HR", "Back to HR"),
    ("HR overzicht", "HR overview"),
    ("Openstaande Vacatures", "Open Positions"),
    ("Word onderdeel van ons team! Bekijk hieronder onze openstaande posities.", "Become part of our team! View our open positions below."),
    ("Huidige Vacatures", "Current Vacancies"),
    ("**Afdeling:** IT\\n**Type:** Fulltime\\n**Locatie:** Amsterdam / Hybrid\\n\\nWe zoeken een ervaren frontend developer met Vue.js kennis.", "**Department:** IT\\n**Type:** Full-time\\n**Location:** Amsterdam / Hybrid\\n\\nWe are looking for an experienced frontend developer with Vue.js knowledge."),
    ("**Afdeling:** Marketing\\n**Type:** Fulltime\\n**Locatie:** Amsterdam\\n\\nLeid ons marketing team naar nieuwe hoogtes.", "**Department:** Marketing\\n**Type:** Full-time\\n**Location:** Amsterdam\\n\\nLead our marketing team to new heights."),
    ("Solliciteren", "Apply"),
    ("Interesse in een van onze vacatures?\\n\\n1. Stuur je CV naar jobs@intravox.io\\n2. Vermeld de vacaturetitel\\n3. We nemen binnen 5 werkdagen contact op", "Interested in one of our vacancies?\\n\\n1. Send your CV to jobs@intravox.io\\n2. Mention the vacancy title\\n3. We will contact you within 5 working days"),
    ("Welkom bij IntraVox! Alles wat je nodig hebt voor een vliegende start.", "Welcome to IntraVox! Everything you need for a flying start."),
    ("**Dag 1-2: Introductie**\\n- Welkomstgesprek met HR\\n- Rondleiding kantoor\\n- IT setup en accounts\\n\\n**Dag 3-5: Team kennismaking**\\n- Ontmoet je teamleden\\n- Eerste projectbriefing\\n- Buddy toegewezen", "**Day 1-2: Introduction**\\n- Welcome meeting with HR\\n- Office tour\\n- IT setup and accounts\\n\\n**Day 3-5: Team introduction**\\n- Meet your team members\\n- First project briefing\\n- Buddy assigned"),
    ("**Training & Development**\\n- Verplichte trainingen\\n- Productkennis sessies\\n- Eerste taken starten\\n\\n**Evaluatie**\\n- Feedback gesprek na 2 weken\\n- Doelen stellen voor proeftijd", "**Training & Development**\\n- Mandatory training\\n- Product knowledge sessions\\n- Start first tasks\\n\\n**Evaluation**\\n- Feedback meeting after 2 weeks\\n- Set goals for probation period"),
    ("Belangrijke Links", "Important Links"),
    ("HR Beleid", "HR Policies"),
    ("Belangrijke beleidsregels en richtlijnen voor alle medewerkers.", "Important policies and guidelines for all employees."),
    ("Verlof & Vakantie", "Leave & Vacation"),
    ("**Vakantiedagen:** 25 per jaar\\n**Feestdagen:** Volgens Nederlandse kalender\\n\\nVerlof aanvragen via het HR portaal, minimaal 2 weken van tevoren voor langere periodes.", "**Vacation days:** 25 per year\\n**Holidays:** According to Dutch calendar\\n\\nRequest leave via the HR portal, at least 2 weeks in advance for longer periods."),
    ("Thuiswerken", "Working from Home"),
    ("Hybride werken is de norm:\\n\\n- Minimaal 2 dagen per week op kantoor\\n- In overleg met je manager\\n- Goede werkplek thuis vereist\\n- Thuiswerkvergoeding beschikbaar", "Hybrid working is the norm:\\n\\n- At least 2 days per week in the office\\n- In consultation with your manager\\n- Good home workplace required\\n- Home working allowance available"),
    ("Ziekteverzuim", "Sick Leave"),
    ("Bij ziekte:\\n\\n1. Meld je vóór 9:00 bij je manager\\n2. Registreer in het HR systeem\\n3. Houd contact over herstel\\n\\nBij langdurig verzuim volgen we het verzuimprotocol.", "When sick:\\n\\n1. Report to your manager before 9:00\\n2. Register in the HR system\\n3. Stay in contact about recovery\\n\\nFor long-term absence, we follow the absence protocol."),
    ("Gedragscode", "Code of Conduct"),
    ("We verwachten van alle medewerkers:\\n\\n- Respectvolle omgang\\n- Professioneel gedrag\\n- Integriteit\\n- Vertrouwelijkheid\\n\\nDe volledige gedragscode is beschikbaar in het HR portaal.", "We expect from all employees:\\n\\n- Respectful interaction\\n- Professional behavior\\n- Integrity\\n- Confidentiality\\n\\nThe full code of conduct is available in the HR portal."),
    ("Welkom bij Sales", "Welcome to Sales"),
    ("Het sales team zorgt voor groei en klantrelaties.", "The sales team drives growth and customer relationships."),
    ("Klantrelaties en contactbeheer.", "Customer relationships and contact management."),
    ("Verkoopkansen en deals bijhouden.", "Track sales opportunities and deals."),
    ("Doelstellingen en resultaten.", "Goals and results."),
    ("**Team Lead:** Jan de Vries\\n**Account Managers:** 4\\n**Sales Support:** 2\\n\\nContacteer ons via sales@intravox.io", "**Team Lead:** Jan de Vries\\n**Account Managers:** 4\\n**Sales Support:** 2\\n\\nContact us via sales@intravox.io"),
    ("Terug naar Sales", "Back to Sales"),
    ("Sales overzicht", "Sales overview"),
    ("CRM & Klantbeheer", "CRM & Customer Management"),
    ("Centraal overzicht van al onze klantrelaties en prospects.", "Central overview of all our customer relationships and prospects."),
    ("CRM Systeem", "CRM System"),
    ("We gebruiken **HubSpot** als ons CRM systeem.\\n\\n**Toegang aanvragen:** Via IT ticket\\n**Training:** Beschikbaar via HubSpot Academy\\n**Support:** crm@intravox.io", "We use **HubSpot** as our CRM system.\\n\\n**Request access:** Via IT ticket\\n**Training:** Available via HubSpot Academy\\n**Support:** crm@intravox.io"),
    ("Klant Categorieën", "Customer Categories"),
    ("CRM Richtlijnen", "CRM Guidelines"),
    ("- Update contacten binnen 24 uur na meeting\\n- Log alle communicatie\\n- Gebruik standaard deal stages\\n- Voeg notities toe bij elke interactie", "- Update contacts within 24 hours after meeting\\n- Log all communication\\n- Use standard deal stages\\n- Add notes to every interaction"),
    ("Van lead tot klant - volg het verkoopproces.", "From lead to customer - follow the sales process."),
    ("1. **Lead** - Eerste contact\\n2. **Qualified** - Interesse bevestigd\\n3. **Demo** - Product demonstratie\\n4. **Proposal** - Offerte verstuurd\\n5. **Negotiation** - In onderhandeling\\n6. **Closed Won** - Deal gesloten\\n7. **Closed Lost** - Niet doorgegaan", "1. **Lead** - First contact\\n2. **Qualified** - Interest confirmed\\n3. **Demo** - Product demonstration\\n4. **Proposal** - Quote sent\\n5. **Negotiation** - In negotiation\\n6. **Closed Won** - Deal closed\\n7. **Closed Lost** - Did not proceed"),
    ("Conversie Targets", "Conversion Targets"),
    ("Elke maandag 10:00 - Pipeline review meeting.\\n\\nBespreek:\\n- Nieuwe leads\\n- Beweging in pipeline\\n- Deals at risk\\n- Forecasting", "Every Monday 10:00 - Pipeline review meeting.\\n\\nDiscuss:\\n- New leads\\n- Movement in pipeline\\n- Deals at risk\\n- Forecasting"),
    ("Doelstellingen en resultaten voor het sales team.", "Goals and results for the sales team."),
    ("**Team Target:** €500.000\\n**New Customers:** 25\\n**Upsell Revenue:** €100.000\\n\\n*Progress wordt wekelijks bijgewerkt*", "**Team Target:** €500,000\\n**New Customers:** 25\\n**Upsell Revenue:** €100,000\\n\\n*Progress is updated weekly*"),
    ("Individuele Targets", "Individual Targets"),
    ("Targets worden maandelijks vastgesteld in overleg met de Team Lead.\\n\\n**Basis:** Ervaring en portfolio\\n**Bonus:** Bij >100% achievement\\n**Review:** Elk kwartaal", "Targets are set monthly in consultation with the Team Lead.\\n\\n**Basis:** Experience and portfolio\\n**Bonus:** At >100% achievement\\n**Review:** Every quarter"),
    ("- Aantal calls/week\\n- Aantal demos/week\\n- Deal close rate\\n- Average deal size\\n- Customer satisfaction", "- Number of calls/week\\n- Number of demos/week\\n- Deal close rate\\n- Average deal size\\n- Customer satisfaction"),
    ("Welkom bij Marketing", "Welcome to Marketing"),
    ("Creatief team voor branding, campagnes en communicatie.", "Creative team for branding, campaigns and communication."),
    ("Lopende en geplande marketingcampagnes.", "Running and planned marketing campaigns."),
    ("Social media kanalen en content planning.", "Social media channels and content planning."),
    ("Huisstijl, logo's en brand guidelines.", "Brand identity, logos and brand guidelines."),
    ("**Team Lead:** Lisa van Berg\\n**Content Creators:** 2\\n**Designer:** 1\\n\\nContacteer ons via marketing@intravox.io", "**Team Lead:** Lisa van Berg\\n**Content Creators:** 2\\n**Designer:** 1\\n\\nContact us via marketing@intravox.io"),
    ("Terug naar Marketing", "Back to Marketing"),
    ("Marketing overzicht", "Marketing overview"),
    ("Campagnes", "Campaigns"),
    ("Overzicht van lopende en geplande marketingcampagnes.", "Overview of running and planned marketing campaigns."),
    ("Actieve Campagnes", "Active Campaigns"),
    ("**Product Launch Q4**\\nStatus: Live\\nKanalen: LinkedIn, Email, Website\\nBudget: €15.000\\n\\n**Holiday Campaign**\\nStatus: In voorbereiding\\nKanalen: Social, Email\\nBudget: €5.000", "**Product Launch Q4**\\nStatus: Live\\nChannels: LinkedIn, Email, Website\\nBudget: €15,000\\n\\n**Holiday Campaign**\\nStatus: In preparation\\nChannels: Social, Email\\nBudget: €5,000"),
    ("Campagne Planning", "Campaign Planning"),
    ("Nieuwe campagne ideeën? Dien een voorstel in via het marketing portaal met:\\n\\n- Doelstelling\\n- Doelgroep\\n- Kanalen\\n- Budget schatting\\n- Timeline", "New campaign ideas? Submit a proposal via the marketing portal with:\\n\\n- Objective\\n- Target audience\\n- Channels\\n- Budget estimate\\n- Timeline"),
    ("Onze aanwezigheid op social media platforms.", "Our presence on social media platforms."),
    ("Kanalen", "Channels"),
    ("De content kalender wordt beheerd in **Notion**.\\n\\n- Maandag: Blog post\\n- Woensdag: Product tip\\n- Vrijdag: Community highlight\\n\\nToegang aanvragen via marketing@intravox.io", "The content calendar is managed in **Notion**.\\n\\n- Monday: Blog post\\n- Wednesday: Product tip\\n- Friday: Community highlight\\n\\nRequest access via marketing@intravox.io"),
    ("- Blijf on-brand\\n- Reageer binnen 24 uur\\n- Geen controversiële topics\\n- Check spelling & grammar\\n- Gebruik goedgekeurde visuals", "- Stay on-brand\\n- Respond within 24 hours\\n- No controversial topics\\n- Check spelling & grammar\\n- Use approved visuals"),
    ("Huisstijl richtlijnen en brand assets.", "Brand identity guidelines and brand assets."),
    ("Logo & Kleuren", "Logo & Colors"),
    ("**Primary Color:** #0082c9\\n**Secondary:** #3a3c3e\\n**Accent:** #00c9a7\\n\\nLogo varianten beschikbaar in het brand portal.", "**Primary Color:** #0082c9\\n**Secondary:** #3a3c3e\\n**Accent:** #00c9a7\\n\\nLogo variants available in the brand portal."),
    ("**Headings:** Inter Bold\\n**Body:** Inter Regular\\n**Code:** Fira Code\\n\\nFonts zijn beschikbaar via Google Fonts.", "**Headings:** Inter Bold\\n**Body:** Inter Regular\\n**Code:** Fira Code\\n\\nFonts are available via Google Fonts."),
    ("Download alle brand assets via het **Brand Portal**:\\n\\n- Logo's (PNG, SVG, EPS)\\n- Kleurpaletten\\n- Presentatie templates\\n- Social media templates\\n- Email signatures", "Download all brand assets via the **Brand Portal**:\\n\\n- Logos (PNG, SVG, EPS)\\n- Color palettes\\n- Presentation templates\\n- Social media templates\\n- Email signatures"),
    ("Documentatie Overzicht", "Documentation Overview"),
    ("Alles wat u moet weten om IntraVox te gebruiken en configureren.", "Everything you need to know to use and configure IntraVox."),
    ("Installeren", "Install"),
    ("Installatie handleiding voor administrators.", "Installation guide for administrators."),
    ("Gebruikers handleidingen voor dagelijks gebruik.", "User guides for daily use."),
    ("API referentie voor developers.", "API reference for developers."),
    ("Antwoorden op veelgestelde vragen.", "Answers to frequently asked questions."),
    ("Handige tips voor efficiënt werken.", "Useful tips for efficient work."),
    ("Terug naar Documentatie", "Back to Documentation"),
    ("Documentatie overzicht", "Documentation overview"),
    ("Installatie Handleiding", "Installation Guide"),
    ("Stap voor stap IntraVox installeren op uw Nextcloud server.", "Step by step installing IntraVox on your Nextcloud server."),
    ("Vereisten", "Requirements"),
    ("**Server:**\\n- Nextcloud 25 of hoger\\n- PHP 8.0+\\n- MySQL/MariaDB of PostgreSQL\\n\\n**Aanbevolen:**\\n- 2GB RAM minimum\\n- SSD opslag", "**Server:**\\n- Nextcloud 25 or higher\\n- PHP 8.0+\\n- MySQL/MariaDB or PostgreSQL\\n\\n**Recommended:**\\n- 2GB RAM minimum\\n- SSD storage"),
    ("Installatie Stappen", "Installation Steps"),
    ("1. Download IntraVox van de App Store\\n2. Activeer de app in Nextcloud\\n3. Configureer de gedeelde map\\n4. Stel permissies in\\n5. Maak uw eerste pagina!", "1. Download IntraVox from the App Store\\n2. Activate the app in Nextcloud\\n3. Configure the shared folder\\n4. Set permissions\\n5. Create your first page!"),
    ("Configuratie", "Configuration"),
    ("Na installatie kunt u configureren:\\n\\n- Standaard taal\\n- Navigatie type\\n- Toegangsrechten\\n- Thema instellingen", "After installation you can configure:\\n\\n- Default language\\n- Navigation type\\n- Access rights\\n- Theme settings"),
    ("Handleidingen", "User Guides"),
    ("Gebruikershandleidingen voor dagelijks gebruik van IntraVox.", "User guides for daily use of IntraVox."),
    ("Pagina's Maken", "Creating Pages"),
    ("1. Klik op \"Nieuwe Pagina\"\\n2. Kies een layout\\n3. Sleep widgets naar de pagina\\n4. Vul content in\\n5. Sla op en publiceer", "1. Click \"New Page\"\\n2. Choose a layout\\n3. Drag widgets to the page\\n4. Fill in content\\n5. Save and publish"),
    ("Navigatie Beheren", "Managing Navigation"),
    ("1. Ga naar Instellingen\\n2. Klik op Navigatie\\n3. Voeg menu items toe\\n4. Drag-and-drop om te herordenen\\n5. Sla wijzigingen op", "1. Go to Settings\\n2. Click Navigation\\n3. Add menu items\\n4. Drag-and-drop to reorder\\n5. Save changes"),
    ("Afbeeldingen Toevoegen", "Adding Images"),
    ("1. Voeg een Image widget toe\\n2. Klik om een afbeelding te selecteren\\n3. Upload of kies uit Nextcloud\\n4. Pas grootte en positie aan\\n5. Voeg alt-tekst toe", "1. Add an Image widget\\n2. Click to select an image\\n3. Upload or choose from Nextcloud\\n4. Adjust size and position\\n5. Add alt text"),
    ("API Documentatie", "API Documentation"),
    ("API referentie voor developers die willen integreren met IntraVox.", "API reference for developers who want to integrate with IntraVox."),
    ("Authenticatie", "Authentication"),
    ("Gebruik Nextcloud's standaard authenticatie:\\n\\n```\\nAuthorization: Bearer <token>\\n```\\n\\nOf basic auth met app password.", "Use Nextcloud's standard authentication:\\n\\n```\\nAuthorization: Bearer <token>\\n```\\n\\nOr basic auth with app password."),
    ("**GET** `/apps/intravox/api/pages`\\nLijst alle pagina's\\n\\n**GET** `/apps/intravox/api/page/{id}`\\nHaal specifieke pagina op\\n\\n**POST** `/apps/intravox/api/page`\\nMaak nieuwe pagina", "**GET** `/apps/intravox/api/pages`\\nList all pages\\n\\n**GET** `/apps/intravox/api/page/{id}`\\nGet specific page\\n\\n**POST** `/apps/intravox/api/page`\\nCreate new page"),
    ("API calls zijn gelimiteerd tot:\\n\\n- 100 requests per minuut\\n- 1000 requests per uur\\n\\nBij overschrijding krijgt u een 429 response.", "API calls are limited to:\\n\\n- 100 requests per minute\\n- 1000 requests per hour\\n\\nExceeding limits returns a 429 response."),
    ("Veelgestelde Vragen", "Frequently Asked Questions"),
    ("Antwoorden op de meest gestelde vragen over IntraVox.", "Answers to the most frequently asked questions about IntraVox."),
    ("Algemene Vragen", "General Questions"),
    ("**Is IntraVox gratis?**\\nJa, IntraVox is 100% gratis en open source.\\n\\n**Welke Nextcloud versie heb ik nodig?**\\nNextcloud 25 of hoger.\\n\\n**Kan ik IntraVox aanpassen?**\\nJa, de broncode is beschikbaar op GitHub.", "**Is IntraVox free?**\\nYes, IntraVox is 100% free and open source.\\n\\n**What Nextcloud version do I need?**\\nNextcloud 25 or higher.\\n\\n**Can I customize IntraVox?**\\nYes, the source code is available on GitHub."),
    ("Technische Vragen", "Technical Questions"),
    ("**Waar wordt content opgeslagen?**\\nIn een gedeelde map in Nextcloud Files.\\n\\n**Ondersteunt IntraVox meerdere talen?**\\nJa, Nederlands, Engels, Duits en Frans.\\n\\n**Hoe maak ik een backup?**\\nBackup de IntraVox map in Nextcloud.", "**Where is content stored?**\\nIn a shared folder in Nextcloud Files.\\n\\n**Does IntraVox support multiple languages?**\\nYes, Dutch, English, German and French.\\n\\n**How do I make a backup?**\\nBackup the IntraVox folder in Nextcloud."),
    ("Problemen Oplossen", "Troubleshooting"),
    ("**Pagina laadt niet**\\nControleer of de app is geactiveerd en de map bestaat.\\n\\n**Geen bewerkrechten**\\nControleer de folder permissies in Nextcloud.\\n\\n**Afbeeldingen tonen niet**\\nControleer of de images folder correct is geconfigureerd.", "**Page does not load**\\nCheck if the app is activated and the folder exists.\\n\\n**No edit rights**\\nCheck the folder permissions in Nextcloud.\\n\\n**Images do not show**\\nCheck if the images folder is correctly configured."),
    ("Handige tips voor efficiënt werken met IntraVox.", "Useful tips for working efficiently with IntraVox."),
    ("**Editor:**\\n- Ctrl+S - Opslaan\\n- Ctrl+Z - Ongedaan maken\\n- Ctrl+Y - Opnieuw\\n- Esc - Sluiten\\n\\n**Navigatie:**\\n- / - Zoeken\\n- H - Home", "**Editor:**\\n- Ctrl+S - Save\\n- Ctrl+Z - Undo\\n- Ctrl+Y - Redo\\n- Esc - Close\\n\\n**Navigation:**\\n- / - Search\\n- H - Home"),
    ("- Gebruik duidelijke paginatitels\\n- Houd navigatie overzichtelijk (max 7 items)\\n- Optimaliseer afbeeldingen voor web\\n- Gebruik consistente layouts\\n- Test op mobile devices", "- Use clear page titles\\n- Keep navigation clear (max 7 items)\\n- Optimize images for web\\n- Use consistent layouts\\n- Test on mobile devices"),
    ("Verborgen Features", "Hidden Features"),
    ("**Markdown in tekst widgets:**\\nGebruik `**vet**`, `*cursief*`, en meer.\\n\\n**Externe links:**\\nGebruik target=\"_blank\" om in nieuw tabblad te openen.\\n\\n**CSS variabelen:**\\nGebruik Nextcloud thema kleuren voor consistente styling.", "**Markdown in text widgets:**\\nUse `**bold**`, `*italic*`, and more.\\n\\n**External links:**\\nUse target=\"_blank\" to open in new tab.\\n\\n**CSS variables:**\\nUse Nextcloud theme colors for consistent styling."),
    ("Over IntraVox", "About IntraVox"),
    ("De moderne intranet oplossing voor Nextcloud.", "The modern intranet solution for Nextcloud."),
    ("Onze Missie", "Our Mission"),
    ("IntraVox maakt professionele intranets toegankelijk voor elke organisatie. Geen dure licenties, geen vendor lock-in - gewoon een krachtige, open source oplossing.", "IntraVox makes professional intranets accessible to every organization. No expensive licenses, no vendor lock-in - just a powerful, open source solution."),
    ("Waarom IntraVox?", "Why IntraVox?"),
    ("**Open Source**\\nVolledig transparant en aanpasbaar.\\n\\n**Privacy First**\\nUw data blijft van u.\\n\\n**Nextcloud Native**\\nGeïntegreerd met het beste platform.\\n\\n**Community Driven**\\nGebouwd door en voor gebruikers.", "**Open Source**\\nFully transparent and customizable.\\n\\n**Privacy First**\\nYour data stays yours.\\n\\n**Nextcloud Native**\\nIntegrated with the best platform.\\n\\n**Community Driven**\\nBuilt by and for users."),
    ("Het Team", "The Team"),
    ("IntraVox wordt ontwikkeld door een klein team van developers die geloven in open source en privacy.\\n\\nWilt u bijdragen? Check onze GitHub repository!", "IntraVox is developed by a small team of developers who believe in open source and privacy.\\n\\nWant to contribute? Check our GitHub repository!"),
    ("Klanten & Cases", "Customers & Cases"),
    ("Ontdek hoe andere organisaties IntraVox gebruiken.", "Discover how other organizations use IntraVox."),
    ("Succesverhalen", "Success stories"),
    ("**TechCorp BV**\\n500 medewerkers\\n\"IntraVox heeft onze interne communicatie getransformeerd.\"\\n\\n**Universiteit Amsterdam**\\n1000+ gebruikers\\n\"Perfect voor onze faculteitsportals.\"", "**TechCorp BV**\\n500 employees\\n\"IntraVox has transformed our internal communication.\"\\n\\n**University of Amsterdam**\\n1000+ users\\n\"Perfect for our faculty portals.\""),
    ("Gebruik Cases", "Use Cases"),
    ("- **Bedrijfsintranet** - Centraal informatieplatform\\n- **Kennisbank** - Documentatie en FAQ\\n- **Team Portals** - Per afdeling of project\\n- **Onboarding** - Nieuwe medewerkers", "- **Company Intranet** - Central information platform\\n- **Knowledge Base** - Documentation and FAQ\\n- **Team Portals** - Per department or project\\n- **Onboarding** - New employees"),
    ("Uw Verhaal Delen?", "Share Your Story?"),
    ("Gebruikt u IntraVox? We horen graag uw ervaringen!\\n\\nMail naar: stories@intravox.io", "Do you use IntraVox? We would love to hear your experiences!\\n\\nEmail: stories@intravox.io"),
    ("Externe Links", "External Links"),
    ("Handige externe bronnen en partners.", "Useful external resources and partners."),
    ("Officiële Nextcloud documentatie en community.", "Official Nextcloud documentation and community."),
    ("Andere tools die goed samenwerken met IntraVox.", "Other tools that work well with IntraVox."),
    ("Onze partners voor implementatie en support.", "Our partners for implementation and support."),
    ("Functies", "Features"),
    ("Navigatie", "Navigation"),
    ("Prijzen", "Pricing"),
    ("Afdelingen", "Departments"),
    ("Vacatures", "Job Openings"),
    ("Documentatie", "Documentation"),
    ("Installatie", "Installation"),
    ("Nieuws", "News"),
    ("Evenementen", "Events"),
    ("Welkom", "Welcome"),
    ("Lees meer", "Read more"),
    ("Meer informatie", "More information"),
    ("Bekijk", "View"),
    ("Ontdek", "Discover"),
    ("Terug naar", "Back to"),
    ("overzicht", "overview"),
    ("Richtlijnen", "Guidelines"),
    ("Verplicht voor", "Required for"),
    ("Let op", "Note"),
    ("Meld", "Report"),
    ("direct bij", "directly to"),
    ("of bel", "or call"),
    ("beschikbaar", "available"),
    ("Spoedgevallen", "Emergencies"),
    ("Ticket Indienen", "Submit Ticket"),
    ("Via e-mail", "Via email"),
    ("Reactietijd", "Response time"),
    ("Zelf oplossen", "Self-solve"),
    ("Veelgestelde vragen", "Frequently asked questions"),
    ("Wachtwoord reset", "Password reset"),
    ("VPN problemen", "VPN issues"),
    ("Software installatie", "Software installation"),
    ("Support beschikbaar", "Support available"),
    ("Ma-Vr", "Mon-Fri"),
    ("Feestdagen", "Holidays"),
    ("alleen spoed", "emergencies only"),
    ("Communicatie", "Communication"),
    ("Toegang tot systemen aanvragen via een IT ticket", "Request system access via an IT ticket"),
    ("Vermeld welk systeem en waarom toegang nodig is", "Specify which system and why access is needed"),
    ("Goedkeuring door manager vereist", "Manager approval required"),
    ("Minimaal 12 karakters", "Minimum 12 characters"),
    ("Mix van letters, cijfers, symbolen", "Mix of letters, numbers, symbols"),
    ("Uniek per applicatie", "Unique per application"),
    ("Wijzig elke 90 dagen", "Change every 90 days"),
    ("Gebruik een password manager", "Use a password manager"),
    ("Setup via de IT Helpdesk", "Setup via IT Helpdesk"),
    ("verdachte e-mails", "suspicious emails"),
    ("Klik NOOIT op links in onverwachte e-mails", "NEVER click links in unexpected emails"),
    ("Twijfel je", "In doubt"),
    ("Meld het bij IT Security", "Report it to IT Security"),
    ("Vergrendel je scherm", "Lock your screen"),
    ("Geen wachtwoorden op papier", "No passwords on paper"),
    ("Gevoelige docs in de kluis", "Sensitive docs in the vault"),
    ("Ruim je bureau op", "Clean up your desk"),
    ("Beveiligingsincident", "Security incident"),
    ("Meld direct bij", "Report directly to"),
    ("Overzicht van alle afdelingen", "Overview of all departments"),
    ("Technische ondersteuning voor alle medewerkers", "Technical support for all employees"),
    ("We staan voor je klaar", "We are here to help"),
    ("Overzicht van alle software en systemen die we gebruiken", "Overview of all software and systems we use"),
    ("bij IntraVox", "at IntraVox"),
    ("Richtlijnen voor veilig werken en bescherming van bedrijfsgegevens", "Guidelines for safe working and protection of company data"),
    ("Alles over personeelszaken", "Everything about personnel matters"),
    ("Bekijk onze openstaande vacatures", "View our open positions"),
    ("Word onderdeel van ons team", "Become part of our team"),
    ("Nieuwe medewerkers", "New employees"),
    ("Alles wat je moet weten voor een vliegende start", "Everything you need for a flying start"),
    ("Bedrijfsregels en richtlijnen", "Company rules and guidelines"),
    ("Belangrijke documenten", "Important documents"),
    ("Het sales team", "The sales team"),
    ("Klantrelaties beheren", "Manage customer relationships"),
    ("CRM systeem", "CRM system"),
    ("Verkoopkansen", "Sales opportunities"),
    ("Van lead tot klant", "From lead to customer"),
    ("Doelstellingen", "Targets"),
    ("Kwartaal- en jaardoelen", "Quarterly and annual goals"),
    ("Creatief team", "Creative team"),
    ("Lopende campagnes", "Running campaigns"),
    ("Campagne planning", "Campaign planning"),
    ("Social media kanalen", "Social media channels"),
    ("Online aanwezigheid", "Online presence"),
    ("Huisstijl", "Brand identity"),
    ("Logo en kleuren", "Logo and colors"),
    ("Welkom bij de documentatie", "Welcome to the documentation"),
    ("Alles wat je moet weten", "Everything you need to know"),
    ("Installatie handleiding", "Installation guide"),
    ("Stap voor stap", "Step by step"),
    ("Gebruikershandleiding", "User guide"),
    ("Hoe te gebruiken", "How to use"),
    ("Voor ontwikkelaars", "For developers"),
    ("Antwoorden", "Answers"),
    ("Handige tips", "Useful tips"),
    ("Slim werken", "Work smart"),
    ("Laatste nieuws", "Latest news"),
    ("Blijf op de hoogte", "Stay informed"),
    ("Nieuwe functies", "New features"),
    ("Updates en verbeteringen", "Updates and improvements"),
    ("Aankomende evenementen", "Upcoming events"),
    ("Webinars en workshops", "Webinars and workshops"),
    ("Neem contact op", "Get in touch"),
    ("We helpen je graag", "We are happy to help"),
    ("E-mail", "Email"),
    ("Telefoon", "Phone"),
    ("Adres", "Address"),
    ("Kantoor", "Office"),
    ("Onze prijzen", "Our pricing"),
    ("Transparante tarieven", "Transparent rates"),
    ("Basis", "Basic"),
    ("per maand", "per month"),
    ("per jaar", "per year"),
    ("Gratis", "Free"),
    ("Neem contact op voor prijzen", "Contact us for pricing"),
    ("IntraVox functies", "IntraVox features"),
    ("Ontdek wat mogelijk is", "Discover what is possible"),
    ("Tekst, afbeeldingen en meer", "Text, images and more"),
    ("Layout opties", "Layout options"),
    ("Flexibele pagina indeling", "Flexible page layout"),
    ("Navigatie types", "Navigation types"),
    ("Dropdown en mega menu", "Dropdown and mega menu"),
    ("Nextcloud integratie", "Nextcloud integration"),
    ("Naadloze samenwerking", "Seamless collaboration"),
    ("Bestanden delen", "File sharing"),
    ("Veilig en eenvoudig", "Safe and simple"),
    ("Onze klanten", "Our customers"),
    ("Lees hoe anderen IntraVox gebruiken", "Read how others use IntraVox"),
    ("Over ons", "About us"),
    ("Wie we zijn", "Who we are"),
    ("Ons verhaal", "Our story"),
    ("Het team", "The team"),
    ("Missie en visie", "Mission and vision"),
    ("Klik hier", "Click here"),
    ("Meer weten", "Learn more"),
    ("Ga naar", "Go to"),
    ("Terug", "Back"),
    ("Volgende", "Next"),
    ("Vorige", "Previous"),
    ("Zoeken", "Search"),
    ("Sorteren", "Sort"),
    ("Nieuw", "New"),
    ("Bewerken", "Edit"),
    ("Verwijderen", "Delete"),
    ("Opslaan", "Save"),
    ("Annuleren", "Cancel"),
    ("Sluiten", "Close"),
    ("Ja", "Yes"),
    ("Nee", "No"),
    ("Intern", "Internal"),
    ("Extern", "External"),
    ("Beschikbaar", "Available"),
    ("Widget Overzicht", "Widget Overview"),
    ("Widget Bibliotheek", "Widget Library"),
    ("Tekst widget", "Text widget"),
    ("Rijke tekst met **Markdown** ondersteuning, inclusief lijsten, tabellen en links.", "Rich text with **Markdown** support, including lists, tables and links."),
    ("Afbeelding widget", "Image widget"),
    ("Upload foto's direct vanuit Nextcloud met automatische optimalisatie.", "Upload photos directly from Nextcloud with automatic optimization."),
    ("Koppen van H1 tot H6 voor duidelijke hiërarchie in uw content.", "Headings from H1 to H6 for clear hierarchy in your content."),
    ("Populaire Widgets", "Popular Widgets"),
    ("Tekst Editor", "Text Editor"),
    ("Galerij", "Gallery"),
    ("Foto collecties", "Photo collections"),
    ("Code Blokken", "Code Blocks"),
    ("Layout Elementen", "Layout Elements"),
    ("Scheidingslijnen", "Divider lines"),
    ("Verticale ruimte", "Vertical space"),
    ("Kolommen", "Columns"),
    ("Achtergrond", "Background"),
    ("Kleuren & patronen", "Colors & patterns"),
    ("Aan de slag", "Getting Started"),
    ("Eerste widget plaatsen", "Place your first widget"),
    ("API Referentie", "API Reference"),
    ("Technische documentatie", "Technical documentation"),
    ("Hulp van anderen", "Help from others"),
    ("Snelkoppelingen", "Quick Links"),
    ("Alle Features", "All Features"),
    ("Mega menu voorbeeld", "Mega menu example"),
    ("Stap-voor-stap handleiding", "Step-by-step guide"),
    ("Dropdown menu voorbeeld", "Dropdown menu example"),
    ("Onbeperkte niveaus van submenu's voor complexe structuren.", "Unlimited levels of submenus for complex structures."),
    ("Link naar externe websites met _blank target.", "Link to external websites with _blank target."),
    ("Aparte navigatie per taal voor internationale sites.", "Separate navigation per language for international sites."),
    ("Onze Klanten & Success Stories", "Our Customers & Success Stories"),
    ("Word Onze Next Succes Story", "Become Our Next Success Story"),
    ("Sluit u aan bij duizenden organisaties die kiezen voor open source en data soevereiniteit.", "Join thousands of organizations choosing open source and data sovereignty."),
    ("Integreer IntraVox met externe systemen via onze RESTful API. Alle endpoints zijn available via de Nextcloud OCS API.", "Integrate IntraVox with external systems via our RESTful API. All endpoints are available via the Nextcloud OCS API."),
    ("Meer Documentation", "More Documentation"),
    ("Stap-voor-stap", "Step-by-step"),
    ("Succesvolle campagnes", "Successful campaigns"),
    ("Onze Campaigns", "Our Campaigns"),
    ("View onze lopende en afgeronde marketing campagnes:", "View our ongoing and completed marketing campaigns:"),
    ("Campagne Overzicht", "Campaign Overview"),
    ("Alle marketing campagnes in detail", "All marketing campaigns in detail"),
    ("Overzicht van onze marketing initiatieven en campagnes.", "Overview of our marketing initiatives and campaigns."),
    ("Marketing afdeling overview", "Marketing department overview"),
    ("Onze Diensten", "Our Services"),
    ("*24/7 available voor kritieke issues*", "*24/7 available for critical issues*"),
    ("Verbeterd zoeken", "Improved search"),
    ("News Overzicht", "News Overview"),
    ("Alle nieuwsberichten", "All news articles"),
    ("Aanmelden", "Register"),
    ("Professionele ondersteuning", "Professional support"),
    ("Volg deze stappen om IntraVox te installeren op uw Nextcloud server. De installatie duurt ongeveer 5 minuten.", "Follow these steps to install IntraVox on your Nextcloud server. Installation takes about 5 minutes."),
    ("Koppel externe systemen", "Connect external systems"),
    ("Meer gedetailleerde instructies", "More detailed instructions"),
    ("Zoek Hulp", "Find Help"),
    ("Welcome bij het IntraVox documentatie centrum. Hier vindt u handleidingen, veelgestelde vragen en tips om het maximale uit IntraVox te halen.", "Welcome to the IntraVox documentation center. Here you will find guides, frequently asked questions and tips to get the most out of IntraVox."),
    ("Stap-voor-stap instructies voor alle IntraVox features. Van basis tot gevorderd.", "Step-by-step instructions for all IntraVox features. From basic to advanced."),
    ("Answers to frequently asked questions. Snel de oplossing vinden zonder te zoeken.", "Answers to frequently asked questions. Find the solution quickly without searching."),
    ("Power user tips om uw productiviteit te verhogen en IntraVox optimaal te benutten.", "Power user tips to increase your productivity and make optimal use of IntraVox."),
    ("Aan de Slag", "Getting Started"),
    ("Externale Resources", "External Resources"),
    ("Platform documentatie", "Platform documentation"),
    ("Vraag de community", "Ask the community"),
    ("Bug rapportages", "Bug reports"),
    ("Direct hulp nodig?", "Need direct help?"),
    ("News en updates", "News and updates"),
    ("Zakelijke updates", "Business updates"),
    ("News en tips", "News and tips"),
    ("Discussies en hulp", "Discussions and help"),
    ("Newe features", "New features"),
    ("Alle berichten", "All messages"),
    ("Stel een vraag", "Ask a question"),
];

static BY_LENGTH: OnceLock<Vec<Phrase>> = OnceLock::new();

/// Every phrase, longest Dutch text first. Equal lengths keep table order.
pub fn dutch_to_english() -> &'static [Phrase] {
    BY_LENGTH.get_or_init(|| {
        let mut phrases = DUTCH_TO_ENGLISH.to_vec();
        phrases.sort_by_key(|(dutch, _)| std::cmp::Reverse(dutch.chars().count()));
        phrases
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn phrases_are_unique_and_sorted_longest_first() {
        let phrases = dutch_to_english();
        assert_eq!(phrases.len(), DUTCH_TO_ENGLISH.len());

        let keys: HashSet<_> = phrases.iter().map(|(dutch, _)| *dutch).collect();
        assert_eq!(keys.len(), phrases.len());
        assert!(
            phrases
                .windows(2)
                .all(|pair| pair[0].0.chars().count() >= pair[1].0.chars().count())
        );
    }

    #[test]
    fn no_phrase_is_empty_or_maps_to_itself() {
        for (dutch, english) in dutch_to_english() {
            assert!(!dutch.is_empty());
            assert_ne!(dutch, english);
        }
    }
}
