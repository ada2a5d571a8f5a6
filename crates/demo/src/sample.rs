use toolspec_schema::{tool_enum, tool_fn};

tool_enum! {
    pub enum TemperatureUnit {
        Celsius => "Celsius",
        Fahrenheit => "Fahrenheit",
    }
}

tool_fn! {
    /// Get the current temperature for a specific location
    pub fn get_current_temperature(
        /// The city and state, e.g., San Francisco, CA
        location: String,
        /// The temperature unit to use
        unit: TemperatureUnit,
    ) -> String {
        format!("The temperature at {location} is 37 {:?}", unit)
    }
}
