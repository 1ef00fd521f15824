// File: src/render.rs
// Purpose: Maud templates for the registration page

use maud::{html, Markup, DOCTYPE};

use crate::field::Field;
use crate::form_field::FieldAttrs;
use crate::input::Registration;
use crate::rules::Schema;
use crate::view::{FormView, ERROR_CLASS};

/// Prefix of the per-field validation route, followed by `/<field key>`.
pub const FIELD_VALIDATION_ROUTE: &str = "/validate";

/// Id of the element holding `field`'s message
pub fn error_slot_id(field: Field) -> String {
    format!("{}-error", field.key())
}

/// Full HTML document around `content`
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@1.9.10" {}
            }
            body {
                div class="max-w-xl mx-auto w-full" {
                    div class="flex justify-center my-12" {
                        div class="w-full lg:12 bg-blue-100 p-5 rounded-lg shadow-xl" {
                            (content)
                        }
                    }
                }
            }
        }
    }
}

/// The registration page, showing whatever the view carries
pub fn registration_page(view: &FormView, schema: &Schema) -> Markup {
    page(
        "Create New Account",
        html! {
            h3 class="pt-4 text-2xl text-center font-bold" { "Create New Account" }
            (registration_form(view, schema))
        },
    )
}

pub fn registration_form(view: &FormView, schema: &Schema) -> Markup {
    html! {
        form class="px-8 pt-6 pb-8 mb-4" method="post" action="/" novalidate {
            div class="mb-4 md:flex md:justify-between" {
                div class="mb-4 md:mr-2 md:mb-0" {
                    (text_field(view, schema, Field::FirstName, Some("First Name")))
                }
                div class="md:ml-2" {
                    (text_field(view, schema, Field::LastName, Some("Last Name")))
                }
            }
            div class="mb-4" {
                (text_field(view, schema, Field::Email, Some("Email")))
            }
            div class="mb-4" {
                (text_field(view, schema, Field::Phone, Some("Phone number")))
            }
            div class="mb-4 md:flex md:justify-between" {
                div class="mb-4 md:mr-2 md:mb-0" {
                    (text_field(view, schema, Field::Password, None))
                }
                div class="md:ml-2" {
                    (text_field(view, schema, Field::ConfirmPassword, None))
                }
            }
            div class="mb-4" {
                (terms_field(view, schema))
            }
            div class="mb-6 text-center" {
                button
                    class="w-full px-4 py-2 font-bold text-white bg-violet-600 rounded-full hover:bg-violet-400 hover:text-gray-800 focus:outline-none focus:shadow-outline"
                    type="submit" { "Register Account" }
            }
            hr class="mb-6 border-t";
            div class="text-center" {
                a class="inline-block text-sm text-violet-600 hover:text-blue-800" href="#test" {
                    "Forgot Password?"
                }
            }
            div class="text-center" {
                a class="inline-block text-sm text-violet-600 hover:text-blue-800" href="./index.html" {
                    "Already have an account? Login!"
                }
            }
        }
    }
}

fn text_field(view: &FormView, schema: &Schema, field: Field, placeholder: Option<&str>) -> Markup {
    let display = view.field(field);
    let attrs = FieldAttrs::for_field(schema, field).with_cross_field(schema, field);

    html! {
        label class=(display.label_class) for=(field.input_id()) { (field.label()) }
        input
            class=(display.input_class)
            id=(field.input_id())
            name=(field.input_name())
            type=(attrs.input_type)
            placeholder=[placeholder]
            value=[display.value]
            inputmode=[attrs.input_mode]
            minlength=[attrs.min_length]
            required[attrs.required]
            data-validate=(attrs.data_validate)
            hx-post=(format!("{}/{}", FIELD_VALIDATION_ROUTE, field.key()))
            hx-trigger="blur"
            hx-target=(format!("#{}", error_slot_id(field)));
        (error_slot(field, display.error))
    }
}

fn terms_field(view: &FormView, schema: &Schema) -> Markup {
    let field = Field::TermsAccepted;
    let display = view.field(field);
    let attrs = FieldAttrs::for_field(schema, field);

    html! {
        input
            type=(attrs.input_type)
            id=(field.input_id())
            name=(field.input_name())
            checked[display.checked]
            required[attrs.required]
            data-validate=(attrs.data_validate)
            hx-post=(format!("{}/{}", FIELD_VALIDATION_ROUTE, field.key()))
            hx-trigger="change"
            hx-target=(format!("#{}", error_slot_id(field)));
        label for=(field.input_id()) class=(display.label_class) { (field.label()) }
        (error_slot(field, display.error))
    }
}

/// Wrapper that htmx swaps a fresh message into
pub fn error_slot(field: Field, error: Option<&str>) -> Markup {
    html! {
        div id=(error_slot_id(field)) {
            (error_message(error))
        }
    }
}

/// Replacement slot for another field, swapped out-of-band next to the
/// primary fragment
pub fn error_slot_oob(field: Field, error: Option<&str>) -> Markup {
    html! {
        div id=(error_slot_id(field)) hx-swap-oob="true" {
            (error_message(error))
        }
    }
}

/// The inline message, or nothing
pub fn error_message(error: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = error {
            p class=(ERROR_CLASS) { (message) }
        }
    }
}

/// Confirmation shown after an accepted submission
pub fn accepted_page(registration: &Registration) -> Markup {
    page(
        "Account Created",
        html! {
            h3 class="pt-4 text-2xl text-center font-bold" { "Account Created" }
            p class="px-8 pt-6 pb-8 text-center text-gray-700" {
                "Welcome, " (registration.first_name) " " (registration.last_name) "! "
                "A confirmation will be sent to " (registration.email) "."
            }
        },
    )
}
