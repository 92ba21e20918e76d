//! Login and registration pages.

use std::collections::BTreeMap;

use crate::constants::{LOGIN_PATH, REGISTER_PATH};

use super::layout::{error_list, page};

pub fn login(errors: &BTreeMap<String, Vec<String>>) -> String {
    let body = format!(
        "<h1>Log in</h1>\n{errors}\
         <form method=\"post\" action=\"{action}\">\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <p><a href=\"{register}\">Register</a></p>",
        errors = error_list(errors),
        action = LOGIN_PATH,
        register = REGISTER_PATH,
    );
    page("Log in", &body)
}

pub fn register(errors: &BTreeMap<String, Vec<String>>) -> String {
    let body = format!(
        "<h1>Register</h1>\n{errors}\
         <form method=\"post\" action=\"{action}\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label>\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <label>Confirm password <input type=\"password\" name=\"password_confirmation\"></label>\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n\
         <p><a href=\"{login}\">Log in</a></p>",
        errors = error_list(errors),
        action = REGISTER_PATH,
        login = LOGIN_PATH,
    );
    page("Register", &body)
}
