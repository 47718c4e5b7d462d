pub mod contact {
    pub const MISSING_NAME: &str = "Please enter your name.";
    pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
    pub const MISSING_MESSAGE: &str = "Please enter a message.";
    pub const SENT_TEMPLATE: &str = "Thank you, {}! Your message has been sent successfully.";
}

pub mod skills {
    pub const SELECTED_TEMPLATE: &str = "You selected: {}";
}

pub mod welcome {
    pub const TITLE: &str = "Welcome to My Portfolio!";
    pub const SUBTITLE: &str = "Thanks for visiting. Feel free to explore!";
}
