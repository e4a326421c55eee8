pub mod env {
    pub const CONFIG_FILE_ENV_VAR: &str = "LECTERN_CONFIG";
    pub const ENV_PREFIX: &str = "LECTERN";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";

    pub mod email_client {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const TIMEOUT: Duration = Duration::from_secs(10);
    }

    pub mod google {
        pub const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
        pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
        pub const USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
