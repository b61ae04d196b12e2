//! Page copy. Image references are manifest ids and may be absent from the
//! manifest, in which case the page leaves the image out.

pub const PRODUCT_NAME: &str = "InclusiveRead";
pub const EXTENSION_ARCHIVE_HREF: &str = "/extension.zip";
pub const IMAGES_ENDPOINT: &str = "/api/images";

pub const HERO_IMAGE_ID: &str = "hero-image";
pub static SHOWCASE_IMAGE_IDS: [&str; 4] = ["showcase-1", "showcase-2", "showcase-3", "showcase-4"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub fn href(self) -> String {
        format!("#{}", self.id)
    }
}

/// Anchorable sections in page order. The header tracks these for nav
/// highlighting and the footer links to them.
pub static SECTIONS: [Section; 5] = [
    Section { id: "overview", label: "Overview" },
    Section { id: "features", label: "Features" },
    Section { id: "tutorial", label: "Tutorial" },
    Section { id: "installation", label: "Installation" },
    Section { id: "showcase", label: "Showcase" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_id: &'static str,
}

pub static FEATURES: [Card; 4] = [
    Card {
        icon: "Aa",
        title: "Dyslexic Reading Mode",
        description: "Transforms all webpage text into OpenDyslexic, an open-source typeface designed specifically to mitigate common reading errors. Unlike standard fonts (like Arial or Times New Roman), OpenDyslexic utilizes unique letter shapes with increased spacing and heavy-weighted bases",
        image_id: "feature-font",
    },
    Card {
        icon: "🔊",
        title: "Text-to-Speech",
        description: "Listen to articles and web content with native text-to-speech reader. Accessing the feature is just a simple click away.",
        image_id: "feature-tts",
    },
    Card {
        icon: "🎨",
        title: "Sensory Shield",
        description: "A protective layer that automatically detects and freezes fluctuating UI elements, such as flashing banners or auto-playing carousels, which can trigger sensory overload.",
        image_id: "feature-color",
    },
    Card {
        icon: "📖",
        title: "Jargon Decoder",
        description: "An on-the-fly translation feature that replaces high-friction administrative and legal terminology with actionable, plain-language equivalents or descriptive icons.",
        image_id: "feature-reader",
    },
];

pub static TUTORIAL_STEPS: [Card; 3] = [
    Card {
        icon: "🔑",
        title: "Get Your Free API Key",
        description: "Visit Google AI Studio in order to create a free API key. You can also visit OpenRouter to create a free API key, ensure your billing/credit limit is set to zero.",
        image_id: "tutorial-step-2",
    },
    Card {
        icon: "↪",
        title: "Activate the Extension",
        description: "Open the extension panel, enter your API key, and activate it to unlock the features.",
        image_id: "tutorial-step-3",
    },
    Card {
        icon: "✨",
        title: "Enjoy Enhanced Reading",
        description: "Now you can use all of the powerful features to make your online reading experience better.",
        image_id: "tutorial-step-4",
    },
];

pub static INSTALLATION_STEPS: [Card; 7] = [
    Card {
        icon: "⬇",
        title: "Download ZIP",
        description: "Download the extension as a ZIP file.",
        image_id: "install-step-1",
    },
    Card {
        icon: "🗄",
        title: "Extract ZIP",
        description: "Extract the ZIP file to a folder you can easily find.",
        image_id: "install-step-2",
    },
    Card {
        icon: "⚙",
        title: "Navigate to Extensions",
        description: "In Chrome, go to 'Manage Extensions'.",
        image_id: "install-step-3",
    },
    Card {
        icon: "</>",
        title: "Enable Developer Mode",
        description: "Turn on 'Developer mode' using the toggle.",
        image_id: "tutorial-step-1",
    },
    Card {
        icon: "⬆",
        title: "Load Unpacked",
        description: "Click on the 'Load unpacked' button.",
        image_id: "tutorial-step-2",
    },
    Card {
        icon: "📁",
        title: "Select Folder",
        description: "Select the folder you extracted earlier.",
        image_id: "tutorial-step-3",
    },
    Card {
        icon: "✓",
        title: "Setup Finished",
        description: "You can now pin and use the extension!",
        image_id: "tutorial-step-4",
    },
];

pub const FOOTER_TAGLINE: &str = "A free Chrome extension built for neurodivergent minds making the web accessible for people with ADHD, Autism, Dyslexia, and more.";
pub const FOOTER_SIGNOFF: &str = "Built for neurodivergent minds, by people who understand.";

/// `01`, `02`, ... for a zero-based step index.
pub fn step_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Installation rows alternate which side the screenshot sits on.
pub fn image_trails_copy(index: usize) -> bool {
    index % 2 == 1
}

pub fn copyright_line(year: u32) -> String {
    format!("© {year} {PRODUCT_NAME}.")
}
