/// The two discovery targets of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Clickable grid gallery.
    Grid,
    /// Continuously scrolling image strip.
    Ribbon,
}

/// Plain-data description of one discovery run, handed to the platform
/// layer. The core never touches the network itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryRequest {
    pub base_url: String,
    pub folder: String,
    pub stem: String,
    pub count: u32,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartDiscovery {
        surface: Surface,
        request: DiscoveryRequest,
    },
    /// Persist the dismissed-promo flag.
    SavePromoDismissed,
}
