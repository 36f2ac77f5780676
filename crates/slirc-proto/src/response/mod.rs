//! IRC numeric reply codes as defined in RFC 1459 and RFC 2812.
//!
//! Every entry in the table carries its symbolic name, its numeric code and
//! a [`ReplyKind`] fixed when the table is written down, so deciding whether
//! a reply is an error never re-derives anything from the name.
//!
//! # Reference
//! - RFC 2812: Internet Relay Chat: Client Protocol, section 5

#![allow(non_camel_case_types)]

mod helpers;

pub use helpers::ParseResponseError;

/// Whether a numeric reply reports success or failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReplyKind {
    /// `RPL_*` replies.
    Success,
    /// `ERR_*` replies.
    Error,
}

macro_rules! reply_table {
    ( $( $kind:ident { $( $(#[$doc:meta])* $name:ident = $code:literal, )* } )* ) => {
        /// IRC server numeric reply.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        #[non_exhaustive]
        pub enum Response {
            $( $( $(#[$doc])* $name = $code, )* )*
        }

        impl Response {
            /// Every reply in the table.
            pub const ALL: &'static [Response] = &[ $( $( Response::$name, )* )* ];

            /// The symbolic name, e.g. `ERR_NICKNAMEINUSE`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( $( Response::$name => stringify!($name), )* )*
                }
            }

            /// Success or error classification.
            pub const fn kind(self) -> ReplyKind {
                match self {
                    $( $( Response::$name => ReplyKind::$kind, )* )*
                }
            }
        }
    };
}

reply_table! {
    Success {
        /// 001 - Welcome to the IRC network
        RPL_WELCOME = 1,
        /// 002 - Your host is running version
        RPL_YOURHOST = 2,
        /// 003 - Server creation date
        RPL_CREATED = 3,
        /// 004 - Server info (name, version, user modes, channel modes)
        RPL_MYINFO = 4,
        /// 005 - Server supported features
        RPL_ISUPPORT = 5,

        /// 200 - Trace link
        RPL_TRACELINK = 200,
        /// 201 - Trace connecting
        RPL_TRACECONNECTING = 201,
        /// 202 - Trace handshake
        RPL_TRACEHANDSHAKE = 202,
        /// 203 - Trace unknown
        RPL_TRACEUNKNOWN = 203,
        /// 204 - Trace operator
        RPL_TRACEOPERATOR = 204,
        /// 205 - Trace user
        RPL_TRACEUSER = 205,
        /// 206 - Trace server
        RPL_TRACESERVER = 206,
        /// 207 - Trace service
        RPL_TRACESERVICE = 207,
        /// 208 - Trace new type
        RPL_TRACENEWTYPE = 208,
        /// 209 - Trace class
        RPL_TRACECLASS = 209,
        /// 211 - Stats link info
        RPL_STATSLINKINFO = 211,
        /// 212 - Stats commands
        RPL_STATSCOMMANDS = 212,
        /// 213 - C-line (server connect) entry
        RPL_STATSCLINE = 213,
        /// 214 - N-line (server accept) entry
        RPL_STATSNLINE = 214,
        /// 215 - I-line (client auth) entry
        RPL_STATSILINE = 215,
        /// 216 - Stats K-line
        RPL_STATSKLINE = 216,
        /// 218 - Y-line (connection class) entry
        RPL_STATSYLINE = 218,
        /// 219 - End of stats
        RPL_ENDOFSTATS = 219,
        /// 221 - User mode string
        RPL_UMODEIS = 221,
        /// 234 - Service list
        RPL_SERVLIST = 234,
        /// 235 - Service list end
        RPL_SERVLISTEND = 235,
        /// 241 - L-line (leaf) entry
        RPL_STATSLLINE = 241,
        /// 242 - Stats uptime
        RPL_STATSUPTIME = 242,
        /// 243 - Stats O-line
        RPL_STATSOLINE = 243,
        /// 244 - H-line (hub) entry
        RPL_STATSHLINE = 244,
        /// 251 - Luser client count
        RPL_LUSERCLIENT = 251,
        /// 252 - Luser operator count
        RPL_LUSEROP = 252,
        /// 253 - Luser unknown connections
        RPL_LUSERUNKNOWN = 253,
        /// 254 - Luser channel count
        RPL_LUSERCHANNELS = 254,
        /// 255 - Luser local info
        RPL_LUSERME = 255,
        /// 256 - Admin info start
        RPL_ADMINME = 256,
        RPL_ADMINLOC1 = 257,
        RPL_ADMINLOC2 = 258,
        /// 259 - Admin email
        RPL_ADMINEMAIL = 259,
        /// 261 - Trace log
        RPL_TRACELOG = 261,
        /// 262 - Trace end
        RPL_TRACEEND = 262,
        /// 263 - Try again later
        RPL_TRYAGAIN = 263,

        /// 300 - Dummy reply number
        RPL_NONE = 300,
        /// 301 - Target is away
        RPL_AWAY = 301,
        /// 302 - USERHOST reply
        RPL_USERHOST = 302,
        /// 303 - ISON reply
        RPL_ISON = 303,
        /// 305 - No longer marked as away
        RPL_UNAWAY = 305,
        /// 306 - Marked as away
        RPL_NOWAWAY = 306,
        /// 311 - WHOIS user info
        RPL_WHOISUSER = 311,
        /// 312 - WHOIS server
        RPL_WHOISSERVER = 312,
        /// 313 - WHOIS operator status
        RPL_WHOISOPERATOR = 313,
        /// 314 - WHOWAS user info
        RPL_WHOWASUSER = 314,
        /// 315 - End of WHO
        RPL_ENDOFWHO = 315,
        /// 317 - WHOIS idle time
        RPL_WHOISIDLE = 317,
        /// 318 - End of WHOIS
        RPL_ENDOFWHOIS = 318,
        /// 319 - WHOIS channels
        RPL_WHOISCHANNELS = 319,
        /// 321 - List start
        RPL_LISTSTART = 321,
        /// 322 - List entry
        RPL_LIST = 322,
        /// 323 - List end
        RPL_LISTEND = 323,
        /// 324 - Channel mode
        RPL_CHANNELMODEIS = 324,
        /// 325 - Channel unique operator
        RPL_UNIQOPIS = 325,
        /// 331 - No topic set
        RPL_NOTOPIC = 331,
        /// 332 - Channel topic
        RPL_TOPIC = 332,
        /// 341 - Inviting user to channel
        RPL_INVITING = 341,
        /// 342 - Summoning user
        RPL_SUMMONING = 342,
        /// 346 - Invite list entry
        RPL_INVITELIST = 346,
        /// 347 - End of invite list
        RPL_ENDOFINVITELIST = 347,
        /// 348 - Exception list entry
        RPL_EXCEPTLIST = 348,
        /// 349 - End of exception list
        RPL_ENDOFEXCEPTLIST = 349,
        /// 351 - Server version
        RPL_VERSION = 351,
        /// 352 - WHO reply
        RPL_WHOREPLY = 352,
        /// 353 - NAMES reply
        RPL_NAMREPLY = 353,
        /// 364 - Links entry
        RPL_LINKS = 364,
        /// 365 - End of links
        RPL_ENDOFLINKS = 365,
        /// 366 - End of NAMES
        RPL_ENDOFNAMES = 366,
        /// 367 - Ban list entry
        RPL_BANLIST = 367,
        /// 368 - End of ban list
        RPL_ENDOFBANLIST = 368,
        /// 369 - End of WHOWAS
        RPL_ENDOFWHOWAS = 369,
        /// 371 - Info text
        RPL_INFO = 371,
        /// 372 - MOTD text
        RPL_MOTD = 372,
        /// 374 - End of info
        RPL_ENDOFINFO = 374,
        /// 375 - MOTD start
        RPL_MOTDSTART = 375,
        /// 376 - End of MOTD, the tail of a successful registration burst
        RPL_ENDOFMOTD = 376,
        /// 381 - You are now an operator
        RPL_YOUREOPER = 381,
        /// 382 - Rehashing config
        RPL_REHASHING = 382,
        /// 383 - You are a service
        RPL_YOURESERVICE = 383,
        /// 391 - Server time
        RPL_TIME = 391,
        /// 392 - Users start
        RPL_USERSSTART = 392,
        /// 393 - Users entry
        RPL_USERS = 393,
        /// 394 - End of users
        RPL_ENDOFUSERS = 394,
        /// 395 - No users
        RPL_NOUSERS = 395,
    }
    Error {
        /// 401 - No such nick/channel
        ERR_NOSUCHNICK = 401,
        /// 402 - No such server
        ERR_NOSUCHSERVER = 402,
        /// 403 - No such channel
        ERR_NOSUCHCHANNEL = 403,
        /// 404 - Cannot send to channel
        ERR_CANNOTSENDTOCHAN = 404,
        /// 405 - Too many channels
        ERR_TOOMANYCHANNELS = 405,
        /// 406 - Was no such nick
        ERR_WASNOSUCHNICK = 406,
        /// 407 - Too many targets
        ERR_TOOMANYTARGETS = 407,
        /// 408 - No such service
        ERR_NOSUCHSERVICE = 408,
        /// 409 - PING or PONG without an origin
        ERR_NOORIGIN = 409,
        /// 411 - No recipient
        ERR_NORECIPIENT = 411,
        /// 412 - No text to send
        ERR_NOTEXTTOSEND = 412,
        /// 413 - No top level domain
        ERR_NOTOPLEVEL = 413,
        /// 414 - Wildcard in top level
        ERR_WILDTOPLEVEL = 414,
        /// 415 - Bad mask
        ERR_BADMASK = 415,
        /// 421 - Unknown command
        ERR_UNKNOWNCOMMAND = 421,
        /// 422 - No MOTD
        ERR_NOMOTD = 422,
        /// 423 - No admin info
        ERR_NOADMININFO = 423,
        /// 424 - File error
        ERR_FILEERROR = 424,
        /// 431 - No nickname given
        ERR_NONICKNAMEGIVEN = 431,
        /// 432 - Erroneous nickname
        ERR_ERRONEUSNICKNAME = 432,
        /// 433 - Nickname is already in use
        ERR_NICKNAMEINUSE = 433,
        /// 436 - Nickname collision
        ERR_NICKCOLLISION = 436,
        /// 437 - Resource unavailable
        ERR_UNAVAILRESOURCE = 437,
        /// 441 - User not in channel
        ERR_USERNOTINCHANNEL = 441,
        /// 442 - Not on channel
        ERR_NOTONCHANNEL = 442,
        /// 443 - User on channel
        ERR_USERONCHANNEL = 443,
        /// 444 - No login
        ERR_NOLOGIN = 444,
        /// 445 - Summon disabled
        ERR_SUMMONDISABLED = 445,
        /// 446 - Users disabled
        ERR_USERSDISABLED = 446,
        /// 451 - Not registered
        ERR_NOTREGISTERED = 451,
        /// 461 - Not enough parameters
        ERR_NEEDMOREPARAMS = 461,
        /// 462 - Already registered (RFC spelling)
        ERR_ALREADYREGISTRED = 462,
        /// 463 - No permission for host
        ERR_NOPERMFORHOST = 463,
        /// 464 - Password mismatch
        ERR_PASSWDMISMATCH = 464,
        /// 465 - You are banned
        ERR_YOUREBANNEDCREEP = 465,
        /// 466 - You will be banned
        ERR_YOUWILLBEBANNED = 466,
        /// 467 - Key already set
        ERR_KEYSET = 467,
        /// 471 - Channel is full
        ERR_CHANNELISFULL = 471,
        /// 472 - Unknown mode
        ERR_UNKNOWNMODE = 472,
        /// 473 - Invite only channel
        ERR_INVITEONLYCHAN = 473,
        /// 474 - Cannot join channel (+b)
        ERR_BANNEDFROMCHAN = 474,
        /// 475 - Bad channel key
        ERR_BADCHANNELKEY = 475,
        /// 476 - Bad channel mask
        ERR_BADCHANMASK = 476,
        /// 477 - Channel does not support modes
        ERR_NOCHANMODES = 477,
        /// 478 - Ban list full
        ERR_BANLISTFULL = 478,
        /// 481 - No privileges
        ERR_NOPRIVILEGES = 481,
        /// 482 - Channel op privileges needed
        ERR_CHANOPRIVSNEEDED = 482,
        /// 483 - Cannot kill server
        ERR_CANTKILLSERVER = 483,
        /// 484 - Restricted
        ERR_RESTRICTED = 484,
        /// 485 - Unique op privileges needed
        ERR_UNIQOPPRIVSNEEDED = 485,
        /// 491 - No oper host
        ERR_NOOPERHOST = 491,
        /// 501 - Unknown mode flag
        ERR_UMODEUNKNOWNFLAG = 501,
        /// 502 - Users don't match
        ERR_USERSDONTMATCH = 502,
    }
}
